//! Integration tests for schema reconciliation.
//!
//! These tests drive the reconciler through the facade crate with the
//! rule-backed composer and verify the classification contract over
//! whole documents.

use crosswalk::migrate::{RuleComposer, SchemaReconciler};
use crosswalk::schema::{FieldMapping, SchemaDocument, SchemaField, TableSchema};
use pretty_assertions::assert_eq;

fn source_doc() -> SchemaDocument {
    SchemaDocument::new(vec![
        TableSchema::new(
            "Customers",
            vec![
                SchemaField::new("id", "int").primary_key(),
                SchemaField::new("name", "varchar"),
            ],
        ),
        TableSchema::new(
            "Orders",
            vec![
                SchemaField::new("id", "int").primary_key(),
                SchemaField::new("total", "float"),
            ],
        ),
    ])
}

fn target_doc() -> SchemaDocument {
    SchemaDocument::new(vec![
        TableSchema::new(
            "Clients",
            vec![
                SchemaField::new("id", "int").primary_key(),
                SchemaField::new("full_name", "varchar"),
                SchemaField::new("email", "varchar"),
            ],
        ),
        TableSchema::new(
            "Invoices",
            vec![
                SchemaField::new("id", "int").primary_key(),
                SchemaField::new("amount", "decimal"),
            ],
        ),
    ])
}

/// The worked example from the project requirements: a mapping whose
/// source field does not exist but whose target field does falls
/// through to the validated bucket, because only the target side is
/// inspected by the missing check and the type check needs a
/// resolvable source field.
#[tokio::test]
async fn test_absent_source_field_lands_in_validated_bucket() {
    let composer = RuleComposer::default();
    let reconciler = SchemaReconciler::new(&composer);

    let mappings = vec![
        FieldMapping::new("Customers", "name", "Clients", "full_name"),
        FieldMapping::new("Customers", "email", "Clients", "email"),
    ];

    let contexts = reconciler
        .reconcile(&source_doc(), &target_doc(), &mappings)
        .await
        .unwrap();

    assert_eq!(contexts.len(), 1);
    let ctx = &contexts[0];

    assert_eq!(ctx.validated_mappings.len(), 2);
    assert!(ctx.missing_in_target.is_empty());
    assert!(ctx.datatype_mismatches.is_empty());
    assert_eq!(ctx.validated_mappings[1].source, "email");
    assert_eq!(ctx.validated_mappings[1].target, "email");
}

#[tokio::test]
async fn test_pairs_missing_a_schema_are_skipped() {
    let composer = RuleComposer::default();
    let reconciler = SchemaReconciler::new(&composer);

    let mappings = vec![
        FieldMapping::new("Customers", "name", "Clients", "full_name"),
        // Suppliers exists in neither document
        FieldMapping::new("Suppliers", "code", "Vendors", "code"),
        // Orders exists only on the source side
        FieldMapping::new("Orders", "total", "Receipts", "amount"),
    ];

    let contexts = reconciler
        .reconcile(&source_doc(), &target_doc(), &mappings)
        .await
        .unwrap();

    assert_eq!(contexts.len(), 1);
    assert_eq!(contexts[0].pair_label(), "Customers → Clients");
}

#[tokio::test]
async fn test_unqualified_mappings_are_skipped() {
    let composer = RuleComposer::default();
    let reconciler = SchemaReconciler::new(&composer);

    let unqualified = FieldMapping {
        source_field: "name".to_string(),
        target_field: "full_name".to_string(),
        transformation: String::new(),
        source_table: None,
        target_table: None,
    };

    let contexts = reconciler
        .reconcile(&source_doc(), &target_doc(), &[unqualified])
        .await
        .unwrap();

    assert!(contexts.is_empty());
}

#[tokio::test]
async fn test_context_order_follows_first_seen_pair_order() {
    let composer = RuleComposer::default();
    let reconciler = SchemaReconciler::new(&composer);

    let mappings = vec![
        FieldMapping::new("Orders", "total", "Invoices", "amount"),
        FieldMapping::new("Customers", "name", "Clients", "full_name"),
        FieldMapping::new("Orders", "id", "Invoices", "id"),
    ];

    let contexts = reconciler
        .reconcile(&source_doc(), &target_doc(), &mappings)
        .await
        .unwrap();

    let labels: Vec<String> = contexts.iter().map(|c| c.pair_label()).collect();
    assert_eq!(labels, vec!["Orders → Invoices", "Customers → Clients"]);
    // The interleaved mapping stays in its group, in input order
    assert_eq!(contexts[0].mappings.len(), 2);
    assert_eq!(contexts[0].mappings[1].source_field, "id");
}

#[tokio::test]
async fn test_every_context_carries_an_analysis() {
    let composer = RuleComposer::default();
    let reconciler = SchemaReconciler::new(&composer);

    let mappings = vec![
        FieldMapping::new("Customers", "name", "Clients", "full_name"),
        FieldMapping::new("Orders", "total", "Invoices", "amount"),
    ];

    let contexts = reconciler
        .reconcile(&source_doc(), &target_doc(), &mappings)
        .await
        .unwrap();

    assert_eq!(contexts.len(), 2);
    for ctx in &contexts {
        let analysis = ctx.analysis.as_ref().expect("analysis populated");
        assert!(analysis.contains(&ctx.source_schema.table_name));
        assert!(analysis.contains(&ctx.target_schema.table_name));
    }
}

#[tokio::test]
async fn test_classification_is_exhaustive_and_exclusive() {
    let composer = RuleComposer::default();
    let reconciler = SchemaReconciler::new(&composer);

    let mappings = vec![
        FieldMapping::new("Customers", "id", "Clients", "id"),
        FieldMapping::new("Customers", "name", "Clients", "full_name"),
        FieldMapping::new("Customers", "name", "Clients", "nickname"),
        FieldMapping::new("Orders", "total", "Invoices", "amount"),
    ];

    let contexts = reconciler
        .reconcile(&source_doc(), &target_doc(), &mappings)
        .await
        .unwrap();

    let classified: usize = contexts.iter().map(|c| c.classified_count()).sum();
    let grouped: usize = contexts.iter().map(|c| c.mappings.len()).sum();
    assert_eq!(classified, grouped);
    assert_eq!(grouped, 4);

    // The float → decimal mapping is the one mismatch
    let mismatches: Vec<_> = contexts
        .iter()
        .flat_map(|c| &c.datatype_mismatches)
        .collect();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].source_type, "float");
    assert_eq!(mismatches[0].target_type, "decimal");
}
