//! Migration contexts: the per-table-pair bundle the pipeline runs on.

use serde::{Deserialize, Serialize};

use crosswalk_schema::{FieldMapping, TableSchema};

/// A mapping whose target field exists and whose types line up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedMapping {
    /// Source field name.
    pub source: String,
    /// Target field name.
    pub target: String,
}

/// A mapping whose source and target fields declare different types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMismatch {
    /// Source field name.
    pub source: String,
    /// Target field name.
    pub target: String,
    /// Declared source type.
    pub source_type: String,
    /// Declared target type.
    pub target_type: String,
}

impl TypeMismatch {
    /// Render as `source:type → target:type` for reports.
    pub fn describe(&self) -> String {
        format!(
            "{}:{} → {}:{}",
            self.source, self.source_type, self.target, self.target_type
        )
    }
}

/// The reconciliation result for one (source table, target table) pair.
///
/// Built once by the reconciler. The analysis and the three
/// classification buckets are populated during reconciliation and never
/// mutated afterward. Every mapping in `mappings` lands in exactly one
/// bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationContext {
    /// Resolved source table schema.
    pub source_schema: TableSchema,
    /// Resolved target table schema.
    pub target_schema: TableSchema,
    /// The mappings declared for this pair, in input order.
    pub mappings: Vec<FieldMapping>,
    /// Free-text compatibility analysis from the composer, verbatim.
    pub analysis: Option<String>,
    /// Mappings that check out.
    pub validated_mappings: Vec<ValidatedMapping>,
    /// Target field names that do not exist in the target table.
    pub missing_in_target: Vec<String>,
    /// Mappings whose declared types differ.
    pub datatype_mismatches: Vec<TypeMismatch>,
}

impl MigrationContext {
    /// Create an unclassified context for a resolved table pair.
    pub fn new(
        source_schema: TableSchema,
        target_schema: TableSchema,
        mappings: Vec<FieldMapping>,
    ) -> Self {
        Self {
            source_schema,
            target_schema,
            mappings,
            analysis: None,
            validated_mappings: Vec::new(),
            missing_in_target: Vec::new(),
            datatype_mismatches: Vec::new(),
        }
    }

    /// The `source → target` table pair label.
    pub fn pair_label(&self) -> String {
        format!(
            "{} → {}",
            self.source_schema.table_name, self.target_schema.table_name
        )
    }

    /// Total mappings placed in a classification bucket.
    pub fn classified_count(&self) -> usize {
        self.validated_mappings.len() + self.missing_in_target.len() + self.datatype_mismatches.len()
    }

    /// Whether classification flagged anything.
    pub fn has_findings(&self) -> bool {
        !self.missing_in_target.is_empty() || !self.datatype_mismatches.is_empty()
    }

    /// One-line classification summary for logs and CLI output.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} valid, {} missing in target, {} type mismatches",
            self.pair_label(),
            self.validated_mappings.len(),
            self.missing_in_target.len(),
            self.datatype_mismatches.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswalk_schema::SchemaField;
    use pretty_assertions::assert_eq;

    fn context() -> MigrationContext {
        let source = TableSchema::new("Customers", vec![SchemaField::new("id", "int")]);
        let target = TableSchema::new("Clients", vec![SchemaField::new("id", "int")]);
        let mappings = vec![FieldMapping::new("Customers", "id", "Clients", "id")];
        MigrationContext::new(source, target, mappings)
    }

    #[test]
    fn test_pair_label() {
        assert_eq!(context().pair_label(), "Customers → Clients");
    }

    #[test]
    fn test_unclassified_context_counts() {
        let ctx = context();
        assert_eq!(ctx.classified_count(), 0);
        assert!(!ctx.has_findings());
    }

    #[test]
    fn test_summary_counts_buckets() {
        let mut ctx = context();
        ctx.validated_mappings.push(ValidatedMapping {
            source: "id".to_string(),
            target: "id".to_string(),
        });
        ctx.missing_in_target.push("email".to_string());

        assert_eq!(ctx.classified_count(), 2);
        assert!(ctx.has_findings());
        assert!(ctx.summary().contains("1 valid"));
        assert!(ctx.summary().contains("1 missing in target"));
    }

    #[test]
    fn test_mismatch_describe() {
        let mismatch = TypeMismatch {
            source: "total".to_string(),
            target: "amount".to_string(),
            source_type: "float".to_string(),
            target_type: "decimal".to_string(),
        };
        assert_eq!(mismatch.describe(), "total:float → amount:decimal");
    }
}
