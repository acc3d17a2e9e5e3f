use pqtools_core::{
    CastError, FieldSpec, NULL_TOKENS, SchemaDescriptor, TypeTag, UntypedTable, Value, cast,
};

fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn schema(fields: &[(&str, TypeTag)]) -> SchemaDescriptor {
    SchemaDescriptor::new(
        fields
            .iter()
            .map(|(name, tag)| FieldSpec::new(*name, *tag))
            .collect(),
    )
    .unwrap()
}

#[test]
fn without_schema_every_column_is_string_and_text_is_unchanged() {
    let rows = vec![
        vec!["1", "Alice", " padded "],
        vec!["002", "NA", "1e3"],
    ];
    let table = UntypedTable::from_rows(header(&["id", "name", "raw"]), rows).unwrap();

    let typed = cast(table, None).unwrap();

    assert_eq!(typed.num_rows(), 2);
    assert!(typed.columns().iter().all(|c| c.type_tag == TypeTag::String));
    assert_eq!(
        typed.column("id").unwrap().values,
        vec![Value::string("1"), Value::string("002")]
    );
    assert_eq!(
        typed.column("name").unwrap().values,
        vec![Value::string("Alice"), Value::Null]
    );
    assert_eq!(
        typed.column("raw").unwrap().values,
        vec![Value::string(" padded "), Value::string("1e3")]
    );
}

#[test]
fn partial_schema_types_declared_columns_and_keeps_the_rest_as_string() {
    let table = UntypedTable::from_rows(
        header(&["id", "name", "age"]),
        vec![vec!["1", "Alice", "30"], vec!["2", "", ""]],
    )
    .unwrap();
    let schema = schema(&[("id", TypeTag::Int64), ("age", TypeTag::Int64)]);

    let typed = cast(table, Some(&schema)).unwrap();

    let names: Vec<&str> = typed.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "age", "name"]);

    let id = typed.column("id").unwrap();
    assert_eq!(id.type_tag, TypeTag::Int64);
    assert_eq!(id.values, vec![Value::Int64(1), Value::Int64(2)]);

    let age = typed.column("age").unwrap();
    assert_eq!(age.type_tag, TypeTag::Int64);
    assert_eq!(age.values, vec![Value::Int64(30), Value::Null]);

    let name = typed.column("name").unwrap();
    assert_eq!(name.type_tag, TypeTag::String);
    assert_eq!(name.values, vec![Value::string("Alice"), Value::Null]);
}

#[test]
fn unknown_columns_are_all_reported() {
    let table = UntypedTable::from_rows(header(&["id"]), vec![vec!["1"]]).unwrap();
    let schema = schema(&[
        ("id", TypeTag::Int64),
        ("missing_a", TypeTag::String),
        ("missing_b", TypeTag::Date),
    ]);

    let err = cast(table, Some(&schema)).unwrap_err();

    match err {
        CastError::UnknownColumns { names } => {
            assert_eq!(names, vec!["missing_a".to_string(), "missing_b".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn null_tokens_stay_null_for_every_type() {
    let mut cells: Vec<&str> = NULL_TOKENS.to_vec();
    cells.push("");

    for tag in TypeTag::ALL {
        let rows = cells.iter().map(|cell| vec![*cell]).collect::<Vec<_>>();
        let table = UntypedTable::from_rows(header(&["col"]), rows).unwrap();
        let schema = schema(&[("col", tag)]);

        let typed = cast(table, Some(&schema)).unwrap();

        let column = typed.column("col").unwrap();
        assert_eq!(column.type_tag, tag);
        assert_eq!(column.null_count(), cells.len(), "type {tag}");
    }
}

#[test]
fn cast_failure_names_column_row_and_value() {
    let table = UntypedTable::from_rows(
        header(&["n"]),
        vec![vec!["1"], vec!["2"], vec!["three"], vec!["four"]],
    )
    .unwrap();
    let schema = schema(&[("n", TypeTag::Int64)]);

    let err = cast(table, Some(&schema)).unwrap_err();

    match err {
        CastError::CastFailure {
            column,
            row_index,
            raw_value,
            target_type,
        } => {
            assert_eq!(column, "n");
            assert_eq!(row_index, 2);
            assert_eq!(raw_value, "three");
            assert_eq!(target_type, TypeTag::Int64);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn all_types_cast_from_typical_csv_text() {
    let table = UntypedTable::from_rows(
        header(&["id", "name", "amount", "active", "created_at", "birth_date"]),
        vec![
            vec!["1", "Alice", "100.50", "true", "2024-01-15 10:30:00", "2000-01-15"],
            vec!["2", "Bob", "200.75", "false", "2024-02-20 14:45:00", "1995-06-20"],
        ],
    )
    .unwrap();
    let schema = schema(&[
        ("id", TypeTag::Int64),
        ("name", TypeTag::String),
        ("amount", TypeTag::Float64),
        ("active", TypeTag::Boolean),
        ("created_at", TypeTag::Timestamp),
        ("birth_date", TypeTag::Date),
    ]);

    let typed = cast(table, Some(&schema)).unwrap();

    assert_eq!(typed.num_columns(), 6);
    assert_eq!(
        typed.column("amount").unwrap().values,
        vec![Value::Float64(100.5), Value::Float64(200.75)]
    );
    assert_eq!(
        typed.column("active").unwrap().values,
        vec![Value::Boolean(true), Value::Boolean(false)]
    );
    assert_eq!(
        typed.column("created_at").unwrap().values[0],
        Value::Timestamp(1_705_314_600_000_000)
    );
    assert_eq!(typed.column("birth_date").unwrap().values[0], Value::Date(10_971));
}
