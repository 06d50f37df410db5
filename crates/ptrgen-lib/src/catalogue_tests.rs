use crate::catalogue::{Catalogue, CatalogueError, ExternalReference, ScalarType};

fn time() -> ScalarType {
    ScalarType::external("Time", ExternalReference::new("time"))
}

#[test]
fn reference_name_from_locator() {
    assert_eq!(ExternalReference::new("time").reference_name(), "time");
    assert_eq!(
        ExternalReference::new("github.com/shopspring/decimal").reference_name(),
        "decimal"
    );
}

#[test]
fn reference_name_prefers_alias() {
    let reference = ExternalReference::new("github.com/google/uuid").with_alias("guuid");
    assert_eq!(reference.reference_name(), "guuid");
    assert_eq!(reference.locator(), "github.com/google/uuid");
    assert_eq!(reference.alias(), Some("guuid"));
}

#[test]
fn empty_alias_falls_back_to_locator() {
    let reference = ExternalReference::new("net/netip").with_alias("");
    assert_eq!(reference.reference_name(), "netip");
}

#[test]
fn builtin_symbol_and_name() {
    let ty = ScalarType::builtin("float64");
    assert_eq!(ty.display_name(), "Float64");
    assert_eq!(ty.symbol(), "float64");
    assert!(ty.reference().is_none());
}

#[test]
fn external_symbol_is_qualified() {
    let ty = time();
    assert_eq!(ty.display_name(), "Time");
    assert_eq!(ty.symbol(), "time.Time");

    let aliased = ScalarType::external(
        "Decimal",
        ExternalReference::new("github.com/shopspring/decimal").with_alias("dec"),
    );
    assert_eq!(aliased.symbol(), "dec.Decimal");
}

#[test]
fn standard_catalogue_order() {
    let catalogue = Catalogue::standard().unwrap();
    let names: Vec<&str> = catalogue.iter().map(ScalarType::type_name).collect();

    assert_eq!(
        names,
        [
            "string", "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16",
            "uint32", "uint64", "float32", "float64", "Time",
        ]
    );
    assert_eq!(catalogue.len(), 14);
    assert_eq!(catalogue.types().last().unwrap().symbol(), "time.Time");
}

#[test]
fn standard_catalogue_requires_time_only() {
    let catalogue = Catalogue::standard().unwrap();
    let references = catalogue.required_references();

    assert_eq!(references.len(), 1);
    assert_eq!(references[0].locator(), "time");
}

#[test]
fn required_references_deduplicated_in_first_use_order() {
    let uuid = ExternalReference::new("github.com/google/uuid");
    let catalogue = Catalogue::new([
        ScalarType::builtin("string"),
        ScalarType::external("UUID", uuid.clone()),
        time(),
        ScalarType::external("Duration", ExternalReference::new("time")),
        ScalarType::external("NullUUID", uuid),
    ])
    .unwrap();

    let locators: Vec<&str> = catalogue
        .required_references()
        .into_iter()
        .map(ExternalReference::locator)
        .collect();
    assert_eq!(locators, ["github.com/google/uuid", "time"]);
}

#[test]
fn empty_catalogue_is_allowed() {
    let catalogue = Catalogue::new([]).unwrap();
    assert!(catalogue.is_empty());
    assert!(catalogue.required_references().is_empty());
}

#[test]
fn rejects_empty_type_name() {
    let err = Catalogue::new([ScalarType::builtin("int"), ScalarType::builtin("")]).unwrap_err();
    assert_eq!(err, CatalogueError::EmptyTypeName { index: 1 });
    assert_eq!(err.to_string(), "catalogue entry #1 has an empty type name");
}

#[test]
fn rejects_invalid_type_name() {
    let err = Catalogue::new([ScalarType::builtin("[]byte")]).unwrap_err();
    assert_eq!(
        err,
        CatalogueError::InvalidTypeName {
            type_name: "[]byte".to_string()
        }
    );
}

#[test]
fn rejects_duplicate_type_name() {
    let err = Catalogue::new([
        ScalarType::builtin("int"),
        ScalarType::builtin("string"),
        ScalarType::builtin("int"),
    ])
    .unwrap_err();

    assert_eq!(err.to_string(), "type `int` is listed more than once");
}

#[test]
fn function_names_cover_both_documents() {
    assert_eq!(
        ScalarType::builtin("int8").function_names(),
        ["Int8", "Int8Slice", "Int8Map", "ToInt8", "ToInt8Slice", "ToInt8Map"]
    );
}

#[test]
fn rejects_display_name_collision() {
    let err = Catalogue::new([
        ScalarType::builtin("string"),
        ScalarType::external("String", ExternalReference::new("example.com/text")),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        CatalogueError::FunctionNameCollision {
            function_name: "String".to_string(),
            first: "string".to_string(),
            second: "String".to_string(),
        }
    );
}

#[test]
fn rejects_collision_with_container_function() {
    let err = Catalogue::new([ScalarType::builtin("string"), ScalarType::builtin("stringSlice")])
        .unwrap_err();

    assert_eq!(
        err,
        CatalogueError::FunctionNameCollision {
            function_name: "StringSlice".to_string(),
            first: "string".to_string(),
            second: "stringSlice".to_string(),
        }
    );
}

#[test]
fn rejects_collision_across_documents() {
    let err = Catalogue::new([ScalarType::builtin("string"), ScalarType::builtin("toString")])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "types `string` and `toString` both produce a function named `ToString`"
    );
}

#[test]
fn rejects_empty_reference_name() {
    let err = Catalogue::new([ScalarType::external(
        "Thing",
        ExternalReference::new("example.com/things/"),
    )])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "type `Thing` references `example.com/things/`, which has no usable name"
    );
}

#[test]
fn rejects_conflicting_reference_names() {
    let err = Catalogue::new([
        time(),
        ScalarType::external("Clock", ExternalReference::new("example.com/fake/time")),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        CatalogueError::ReferenceNameConflict {
            reference_name: "time".to_string(),
            first: "time".to_string(),
            second: "example.com/fake/time".to_string(),
        }
    );
}

#[test]
fn same_module_under_same_name_is_one_import() {
    let catalogue = Catalogue::new([
        time(),
        ScalarType::external("Duration", ExternalReference::new("time").with_alias("time")),
    ])
    .unwrap();

    let references = catalogue.required_references();
    assert_eq!(references, [&ExternalReference::new("time")]);
}

#[test]
fn same_module_under_two_names_is_two_imports() {
    let catalogue = Catalogue::new([
        time(),
        ScalarType::external("Duration", ExternalReference::new("time").with_alias("t")),
    ])
    .unwrap();

    assert_eq!(catalogue.required_references().len(), 2);
}

#[test]
fn rejects_locator_whose_last_segment_is_not_an_identifier() {
    let err = Catalogue::new([ScalarType::external(
        "Node",
        ExternalReference::new("gopkg.in/yaml.v3"),
    )])
    .unwrap_err();

    assert_eq!(
        err,
        CatalogueError::InvalidReferenceName {
            type_name: "Node".to_string(),
            reference_name: "yaml.v3".to_string(),
        }
    );

    let err = Catalogue::new([ScalarType::external(
        "T",
        ExternalReference::new("example.com/go-bar"),
    )])
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "type `T` is referred to through `go-bar`, which is not a valid identifier"
    );
}

#[test]
fn aliased_locator_may_have_any_last_segment() {
    let catalogue = Catalogue::new([ScalarType::external(
        "Node",
        ExternalReference::new("gopkg.in/yaml.v3").with_alias("yaml"),
    )])
    .unwrap();

    assert_eq!(catalogue.types()[0].symbol(), "yaml.Node");
}

#[test]
fn rejects_invalid_alias() {
    for alias in ["_", "a b", "."] {
        let err = Catalogue::new([ScalarType::external(
            "Time",
            ExternalReference::new("time").with_alias(alias),
        )])
        .unwrap_err();

        assert_eq!(
            err,
            CatalogueError::InvalidReferenceName {
                type_name: "Time".to_string(),
                reference_name: alias.to_string(),
            }
        );
    }
}

#[test]
fn rejects_locator_that_breaks_import_line() {
    let err = Catalogue::new([ScalarType::external(
        "Thing",
        ExternalReference::new("example.com/\"things"),
    )])
    .unwrap_err();

    assert_eq!(
        err,
        CatalogueError::InvalidLocator {
            type_name: "Thing".to_string(),
            locator: "example.com/\"things".to_string(),
        }
    );
}
