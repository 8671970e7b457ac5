use sheetgrid::{
    AnyBuilder, ArraySheet, BoundsError, CellCoord, CellValue, SheetBounds, SheetBuilder,
    SheetError, SheetLimits, UnboundedBuilder,
};
use sheetgrid_testkit::{jan_2012, mixed_sheets};

#[test]
fn reused_builder_produces_independent_sheets() {
    let (first, second) = mixed_sheets();

    assert_eq!(first.name(), "first");
    assert_eq!((first.row_count(), first.column_count()), (2, 4));
    assert_eq!(first.cell_value(0, 0).unwrap(), None);
    assert_eq!(first.cell_value(1, 3).unwrap(), Some(&CellValue::from(jan_2012())));

    assert_eq!(second.name(), "second");
    assert_eq!(second.cell_value(3, 1).unwrap(), Some(&CellValue::from(123i64)));
    assert!(second.cell_value(3, 3).is_err());
}

#[test]
fn bounds_text_selects_builder() {
    let cases = [
        (Some("$A$1:$C$5"), Some((5, 3))),
        (Some("B2:D4"), Some((4, 4))),
        (Some(""), None),
        (Some("A1:B2:C3"), None),
        (Some("A1:B0"), None),
        (None, None),
    ];
    for (bounds, expected) in cases {
        match (ArraySheet::builder_for(bounds), expected) {
            (AnyBuilder::Bounded(b), Some(extent)) => {
                assert_eq!((b.row_count(), b.column_count()), extent, "{bounds:?}")
            }
            (AnyBuilder::Unbounded(_), None) => {}
            (other, _) => panic!("unexpected builder {other:?} for {bounds:?}"),
        }
    }
}

#[test]
fn bounded_from_text_rejects_cells_outside_declared_range() {
    let mut builder = ArraySheet::builder_for(Some("A1:B2"));
    builder.value(1, 1, "ok").unwrap();
    assert_eq!(
        builder.value(2, 1, "no").err(),
        Some(SheetError::out_of_bounds(2, 1, 2, 2))
    );
}

#[test]
fn builders_agree_on_identical_writes() {
    let mut bounded = ArraySheet::bounded_builder(3, 3).unwrap();
    let mut unbounded = ArraySheet::builder();

    bounded
        .name("same")
        .row(0, 0, ["a", "b", "c"])
        .unwrap()
        .column(1, 2, [1, 2])
        .unwrap();
    unbounded
        .name("same")
        .row(0, 0, ["a", "b", "c"])
        .unwrap()
        .column(1, 2, [1, 2])
        .unwrap();

    assert_eq!(bounded.build().unwrap(), unbounded.build().unwrap());
}

#[test]
fn tight_limits_cap_sparse_growth() {
    let mut builder = UnboundedBuilder::with_limits(SheetLimits::new(4, 4));
    builder.value(3, 3, "corner").unwrap();
    assert!(matches!(
        builder.value(4, 0, "past"),
        Err(SheetError::LimitExceeded { max_rows: 4, .. })
    ));
    let sheet = builder.build().unwrap();
    assert_eq!((sheet.row_count(), sheet.column_count()), (4, 4));
}

#[test]
fn failed_column_leaves_unbounded_builder_unchanged() {
    let mut builder = UnboundedBuilder::with_limits(SheetLimits::new(4, 4));
    assert!(matches!(
        builder.column(2, 0, ["a", "b", "c"]),
        Err(SheetError::LimitExceeded { row: 4, .. })
    ));
    assert_eq!(builder.write_count(), 0);
    assert_eq!(builder.extent(), (0, 0));
}

#[test]
fn failed_row_leaves_bounded_builder_unchanged() {
    let mut builder = ArraySheet::bounded_builder(2, 2).unwrap();
    assert!(builder.row(0, 0, ["x", "y", "z"]).is_err());
    let sheet = builder.build().unwrap();
    assert_eq!(sheet.cell_value(0, 0).unwrap(), None);
    assert_eq!(sheet.cell_value(0, 1).unwrap(), None);
}

#[test]
fn strategies_fail_bulk_writes_the_same_way() {
    let mut bounded: AnyBuilder = ArraySheet::bounded_builder(3, 3).unwrap().into();
    let mut unbounded: AnyBuilder = UnboundedBuilder::with_limits(SheetLimits::new(3, 3)).into();
    for builder in [&mut bounded, &mut unbounded] {
        builder.value(0, 0, "kept").unwrap();
        assert!(builder.row(1, 1, [1, 2, 3]).is_err());
        assert!(builder.column(1, 2, [1, 2, 3]).is_err());
        assert!(builder.table(2, 0, vec![Some(vec![1]), Some(vec![2])]).is_err());
        assert!(builder.map(2, 2, [("k", 1)]).is_err());
    }
    let bounded = bounded.build().unwrap();
    let unbounded = unbounded.build().unwrap();
    assert_eq!(bounded.cell_value(0, 0).unwrap(), Some(&CellValue::from("kept")));
    assert_eq!(unbounded.cell_value(0, 0).unwrap(), Some(&CellValue::from("kept")));
    assert_eq!(bounded.rows().flatten().flatten().count(), 1);
    assert_eq!((unbounded.row_count(), unbounded.column_count()), (1, 1));
}

#[test]
fn table_offsets_past_usize_are_an_error() {
    let mut builder = UnboundedBuilder::with_limits(SheetLimits::unlimited());
    let rows: Vec<Option<Vec<&str>>> = vec![Some(vec![]), Some(vec![]), Some(vec![])];
    assert_eq!(
        builder.table(usize::MAX - 1, 0, rows).err(),
        Some(SheetError::IndexOverflow {
            row: usize::MAX - 1,
            column: 0,
        })
    );
    assert_eq!(builder.write_count(), 0);
}

#[test]
fn bounds_types_are_nameable_from_the_main_crate() {
    let bounds: SheetBounds = SheetBounds::parse("A1:B2").unwrap();
    assert_eq!(bounds.top_left(), CellCoord::new(0, 0));
    assert!(matches!(
        SheetBounds::parse("A1:B0"),
        Err(BoundsError::BottomRight(sheetgrid::A1ParseError::ZeroRow(_)))
    ));
}
