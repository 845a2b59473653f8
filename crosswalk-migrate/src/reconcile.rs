//! Schema reconciliation: grouping raw field mappings into per-pair
//! migration contexts and classifying each mapping.

use std::collections::HashMap;

use indexmap::IndexMap;

use crosswalk_schema::{FieldMapping, SchemaDocument, SchemaField, TableSchema};

use crate::composer::MigrationComposer;
use crate::context::{MigrationContext, TypeMismatch, ValidatedMapping};
use crate::error::MigrateResult;

/// Key identifying one table pair. `None` qualifiers group together and
/// never resolve, so unqualified mappings are skipped downstream.
type PairKey = (Option<String>, Option<String>);

/// Builds one [`MigrationContext`] per resolvable table pair.
pub struct SchemaReconciler<'a, C: MigrationComposer> {
    composer: &'a C,
}

impl<'a, C: MigrationComposer> SchemaReconciler<'a, C> {
    /// Create a reconciler over a composer boundary.
    pub fn new(composer: &'a C) -> Self {
        Self { composer }
    }

    /// Reconcile the mapping list against both schema documents.
    ///
    /// Produces one context per distinct `(source_table, target_table)`
    /// pair, in first-seen order, for pairs where both tables resolve.
    /// Pairs referencing a table absent from either document are
    /// silently skipped: mapping files routinely cover tables outside
    /// the provided dumps.
    pub async fn reconcile(
        &self,
        source: &SchemaDocument,
        target: &SchemaDocument,
        mappings: &[FieldMapping],
    ) -> MigrateResult<Vec<MigrationContext>> {
        let groups = group_by_pair(mappings);
        let mut contexts = Vec::new();

        for ((source_table, target_table), group) in groups {
            let resolved = source_table
                .as_deref()
                .and_then(|name| source.table(name))
                .zip(target_table.as_deref().and_then(|name| target.table(name)));

            let Some((source_schema, target_schema)) = resolved else {
                tracing::debug!(
                    source = source_table.as_deref().unwrap_or("<unqualified>"),
                    target = target_table.as_deref().unwrap_or("<unqualified>"),
                    mappings = group.len(),
                    "skipping pair: table missing from schema documents"
                );
                continue;
            };

            let mut context = classify(source_schema.clone(), target_schema.clone(), group);

            let analysis = self
                .composer
                .analyze(source_schema, target_schema, &context.mappings)
                .await?;
            context.analysis = Some(analysis);

            tracing::info!(summary = %context.summary(), "reconciled table pair");
            contexts.push(context);
        }

        Ok(contexts)
    }
}

/// Group mappings by table pair, preserving first-seen order of distinct
/// pairs and input order within each group.
fn group_by_pair(mappings: &[FieldMapping]) -> IndexMap<PairKey, Vec<FieldMapping>> {
    let mut groups: IndexMap<PairKey, Vec<FieldMapping>> = IndexMap::new();
    for mapping in mappings {
        let key = (mapping.source_table.clone(), mapping.target_table.clone());
        groups.entry(key).or_default().push(mapping.clone());
    }
    groups
}

/// Classify every mapping in a group into exactly one bucket.
///
/// Order matters: the missing-in-target check runs first and only
/// inspects the target side; the type check then requires the source
/// field to exist; everything else is taken as valid. A mapping whose
/// source field is unknown but whose target field exists therefore lands
/// in the validated bucket.
fn classify(
    source_schema: TableSchema,
    target_schema: TableSchema,
    mappings: Vec<FieldMapping>,
) -> MigrationContext {
    let source_fields = field_lookup(&source_schema);
    let target_fields = field_lookup(&target_schema);

    let mut validated_mappings = Vec::new();
    let mut missing_in_target = Vec::new();
    let mut datatype_mismatches = Vec::new();

    for mapping in &mappings {
        let source = source_fields.get(mapping.source_field.as_str());
        let target = target_fields.get(mapping.target_field.as_str());

        match (source, target) {
            (_, None) => missing_in_target.push(mapping.target_field.clone()),
            (Some(src), Some(tgt)) if src.ty != tgt.ty => {
                datatype_mismatches.push(TypeMismatch {
                    source: mapping.source_field.clone(),
                    target: mapping.target_field.clone(),
                    source_type: src.ty.clone(),
                    target_type: tgt.ty.clone(),
                });
            }
            _ => validated_mappings.push(ValidatedMapping {
                source: mapping.source_field.clone(),
                target: mapping.target_field.clone(),
            }),
        }
    }

    MigrationContext {
        source_schema,
        target_schema,
        mappings,
        analysis: None,
        validated_mappings,
        missing_in_target,
        datatype_mismatches,
    }
}

/// Name → field lookup. Duplicate names are last-wins; duplicates are a
/// documented limitation of the input format.
fn field_lookup(schema: &TableSchema) -> HashMap<&str, &SchemaField> {
    schema
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f))
        .collect()
}
