//! End-to-end generation scenarios over small hand-built grids.

use tascii_codegen::{generate, generate_sprite_table};
use tascii_core::{Cell, Grid, TextAttr};

#[test]
fn single_drawn_cell_prints_one_string() {
    let mut grid = Grid::new(1, 1);
    grid.set(0, 0, Cell::new(b'A', TextAttr::from_raw(0x07)));
    let source = generate(&grid);

    assert!(source.contains("txt_0_R0_C0 db \"A\",'$'"));
    let cursor = source.find("    SetCursor 0, 0").expect("cursor directive");
    let print = source
        .find("    PrintText txt_0_R0_C0")
        .expect("print directive");
    assert!(cursor < print);
    // Default attribute: no color set anywhere in the stream.
    assert!(!source.contains("    SetColor"));
}

#[test]
fn attribute_only_run_fills_with_spaces() {
    let attr = TextAttr::from_raw(0x10); // blue background, black foreground
    let grid = Grid::from_rows(vec![vec![Cell::from_attr(attr); 3]]).unwrap();
    let source = generate(&grid);

    assert!(source.contains("    SetCursor 0, 0\n    FillChar 20h, 10h, 3\n"));
    // No strings were needed.
    assert!(!source.contains("txt_"));
    assert!(!source.contains("PrintText"));
}

#[test]
fn dollar_sign_renders_through_fill_not_string() {
    let mut grid = Grid::new(1, 1);
    grid.set(0, 0, Cell::new(36, TextAttr::from_raw(0x07)));
    let source = generate(&grid);

    assert!(source.contains("    FillChar 24h, 07h, 1\n"));
    assert!(!source.contains("txt_"));
}

#[test]
fn attribute_break_splits_into_two_strings() {
    let grid = Grid::from_rows(vec![vec![
        Cell::new(b'A', TextAttr::from_raw(0x07)),
        Cell::new(b'B', TextAttr::from_raw(0x11)),
    ]])
    .unwrap();
    let source = generate(&grid);

    assert!(source.contains("txt_0_R0_C0 db \"A\",'$'"));
    assert!(source.contains("txt_1_R0_C1 db \"B\",'$'"));
    assert!(source.contains("    SetCursor 0, 1\n    SetColor 11h\n    PrintText txt_1_R0_C1\n"));
    // The default-attribute segment still has no color set.
    assert!(source.contains("    SetCursor 0, 0\n    PrintText txt_0_R0_C0\n"));
}

#[test]
fn sprite_table_two_rows() {
    let grid = Grid::from_rows(vec![
        vec![Cell::from_attr(TextAttr::from_raw(0x00)); 2],
        vec![Cell::BLANK; 2],
    ])
    .unwrap();
    assert_eq!(
        generate_sprite_table(&grid, "LABEL"),
        "LABEL\tDB 'KK|'\n\t\tDB '..$'"
    );
}

#[test]
fn generation_is_idempotent() {
    let mut grid = Grid::new(10, 4);
    grid.set(0, 0, Cell::new(b'H', TextAttr::from_raw(0x1E)));
    grid.set(1, 0, Cell::new(b'i', TextAttr::from_raw(0x1E)));
    grid.set(3, 1, Cell::from_attr(TextAttr::from_raw(0x40)));
    grid.set(4, 1, Cell::from_attr(TextAttr::from_raw(0x40)));
    grid.set(7, 2, Cell::new(36, TextAttr::from_raw(0x07)));
    grid.set(9, 3, Cell::from_glyph(0xB0));

    assert_eq!(generate(&grid), generate(&grid));
    assert_eq!(
        generate_sprite_table(&grid, "ART"),
        generate_sprite_table(&grid, "ART")
    );
}

#[test]
fn multi_row_output_keeps_row_major_order() {
    let mut grid = Grid::new(2, 2);
    grid.set(0, 0, Cell::from_glyph(b'a'));
    grid.set(1, 1, Cell::from_glyph(b'b'));
    let source = generate(&grid);

    let first = source.find("    SetCursor 0, 0").unwrap();
    let second = source.find("    SetCursor 1, 1").unwrap();
    assert!(first < second);
    assert!(source.contains("txt_0_R0_C0"));
    assert!(source.contains("txt_1_R1_C1"));
}

#[test]
fn non_printable_glyphs_become_hex_operands() {
    let grid = Grid::from_rows(vec![vec![
        Cell::new(0xB0, TextAttr::from_raw(0x07)),
        Cell::new(0xB1, TextAttr::from_raw(0x07)),
        Cell::new(b'!', TextAttr::from_raw(0x07)),
    ]])
    .unwrap();
    let source = generate(&grid);
    assert!(source.contains("txt_0_R0_C0 db 0B0h,0B1h,\"!\",'$'"));
}

#[test]
fn quote_glyphs_are_doubled_in_string_table() {
    let grid = Grid::from_rows(vec![vec![
        Cell::new(b'"', TextAttr::from_raw(0x07)),
        Cell::new(b'x', TextAttr::from_raw(0x07)),
    ]])
    .unwrap();
    let source = generate(&grid);
    assert!(source.contains("txt_0_R0_C0 db \"\"\"x\",'$'"));
}
