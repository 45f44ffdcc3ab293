#![forbid(unsafe_code)]

//! Fixed TASM program templates.
//!
//! The preamble and postamble are read-only constants; all generated content
//! (string table, instruction stream) accumulates in locals owned by a single
//! generation call, so repeated runs can never grow the template.
//!
//! # Directive reference
//!
//! | Macro | Parameters | Service |
//! |-------|------------|---------|
//! | `SetCursor` | row, col | `int 10h` / `ah=02h` (set cursor position) |
//! | `SetColor` | attr | stores the current print attribute |
//! | `PrintText` | label | `int 10h` / `ah=09h` per glyph until `'$'` |
//! | `FillChar` | chr, attr, count | `int 10h` / `ah=09h` (write char + attr) |
//!
//! The string table is spliced in immediately after the **last** occurrence of
//! [`DATA_MARKER`] in the preamble, so generated `db` lines land inside the
//! `.data` section ahead of the fixed variables.

/// Data-section marker line the string table is inserted after.
pub const DATA_MARKER: &str = "\n.data\n";

/// Program head: model directives, render macros, data section, and the
/// `.code` prologue that switches to 80x25 color text mode.
pub const PREAMBLE: &str = "\
; generated by tascii - text mode art to TASM
; assemble: tasm art.asm
; link:     tlink art.obj
.model small
.stack 100h

SetCursor macro row, col
    mov ah, 02h
    mov bh, 0
    mov dh, row
    mov dl, col
    int 10h
endm

SetColor macro attr
    mov byte ptr cur_attr, attr
endm

PrintText macro lbl
    local nextch, done
    mov si, offset lbl
nextch:
    lodsb
    cmp al, '$'
    je done
    mov ah, 09h
    mov bh, 0
    mov bl, cur_attr
    mov cx, 1
    int 10h
    inc dl
    mov ah, 02h
    mov bh, 0
    int 10h
    jmp nextch
done:
endm

FillChar macro chr, attr, count
    mov ah, 09h
    mov al, chr
    mov bh, 0
    mov bl, attr
    mov cx, count
    int 10h
endm

.data
cur_attr db 07h

.code
start:
    mov ax, @data
    mov ds, ax
    mov ax, 0003h
    int 10h
";

/// Program tail: wait for a keypress, then exit to DOS.
pub const POSTAMBLE: &str = "\
    mov ah, 00h
    int 16h
    mov ax, 4C00h
    int 21h
end start
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_contains_data_marker() {
        assert!(PREAMBLE.contains(DATA_MARKER));
    }

    #[test]
    fn preamble_defines_every_directive() {
        for name in ["SetCursor", "SetColor", "PrintText", "FillChar"] {
            assert!(
                PREAMBLE.contains(&format!("{name} macro")),
                "missing macro {name}"
            );
        }
    }

    #[test]
    fn postamble_exits_to_dos() {
        assert!(POSTAMBLE.contains("4C00h"));
        assert!(POSTAMBLE.ends_with("end start\n"));
    }
}
