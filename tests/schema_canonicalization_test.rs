use pgdoc::{canonicalize_statement_text, canonicalize_type_synonym};
use pretty_assertions::assert_eq;

const DESIRED_UPSERT: &str = r#"
CREATE OR REPLACE FUNCTION public.mt_upsert_user(doc JSONB, docDotNetType character varying, docId uuid, docVersion uuid) RETURNS UUID LANGUAGE plpgsql AS $function$
DECLARE
  final_version uuid;
BEGIN
INSERT INTO public.mt_doc_user ("data", "mt_dotnet_type", "id", "mt_version", mt_last_modified) VALUES (doc, docDotNetType, docId, docVersion, transaction_timestamp())
  ON CONFLICT ON CONSTRAINT pk_mt_doc_user
  DO UPDATE SET "data" = doc, "mt_dotnet_type" = docDotNetType, "mt_version" = docVersion, mt_last_modified = transaction_timestamp();

  SELECT mt_version FROM public.mt_doc_user into final_version WHERE id = docId;
  RETURN final_version;
END;
$function$;
"#;

const ACTUAL_UPSERT: &str = "CREATE OR REPLACE FUNCTION public.mt_upsert_user(doc JSONB, docDotNetType varchar, docId uuid, docVersion uuid) RETURNS UUID LANGUAGE plpgsql AS $function$\r\nDECLARE\r\n final_version uuid;\r\nBEGIN\r\nINSERT INTO public.mt_doc_user (\"data\", \"mt_dotnet_type\", \"id\", \"mt_version\", mt_last_modified) VALUES (doc, docDotNetType, docId, docVersion, transaction_timestamp())\r\n ON CONFLICT ON CONSTRAINT pk_mt_doc_user\r\n DO UPDATE SET \"data\" = doc, \"mt_dotnet_type\" = docDotNetType, \"mt_version\" = docVersion, mt_last_modified = transaction_timestamp();\r\n\r\n SELECT mt_version FROM public.mt_doc_user into final_version WHERE id = docId;\r\n RETURN final_version;\r\nEND;\r\n$function$";

#[test]
fn test_catalog_synonyms() {
    assert_eq!(canonicalize_type_synonym("character varying"), "varchar");
    assert_eq!(canonicalize_type_synonym("varchar"), "varchar");
    assert_eq!(canonicalize_type_synonym("numeric"), "decimal");
    assert_eq!(canonicalize_type_synonym("decimal"), "decimal");
    assert_eq!(canonicalize_type_synonym("Boolean"), "boolean");
    assert_eq!(canonicalize_type_synonym("boolean"), "boolean");
}

#[test]
fn test_synonym_canonicalization_is_idempotent() {
    for raw in ["character varying", "NUMERIC", "Boolean", "jsonb", "double precision", "Character Varying(20)"] {
        let once = canonicalize_type_synonym(raw);
        assert_eq!(canonicalize_type_synonym(&once), once);
    }
}

#[test]
fn test_desired_and_actual_function_match() {
    assert_eq!(
        canonicalize_statement_text(DESIRED_UPSERT),
        canonicalize_statement_text(ACTUAL_UPSERT)
    );
}

#[test]
fn test_statement_canonicalization_is_idempotent() {
    for raw in [DESIRED_UPSERT, ACTUAL_UPSERT, "select 1;;", "  a\tBoolean \n numeric ; "] {
        let once = canonicalize_statement_text(raw);
        assert_eq!(canonicalize_statement_text(&once), once);
    }
}

#[test]
fn test_newline_placement_does_not_matter() {
    let compact = "CREATE TABLE mt_doc_issue (id uuid CONSTRAINT pk_mt_doc_issue PRIMARY KEY, data jsonb NOT NULL);";
    let spread = "CREATE TABLE mt_doc_issue (id     uuid\n    CONSTRAINT pk_mt_doc_issue PRIMARY KEY,\r\n    data jsonb\n  NOT NULL);";

    assert_eq!(canonicalize_statement_text(compact), canonicalize_statement_text(spread));
}

// Characterization: replacement is textual, so identifiers and literals are rewritten too
#[test]
fn test_synonyms_inside_identifiers_are_rewritten() {
    assert_eq!(
        canonicalize_statement_text("CREATE INDEX mt_doc_numeric_total ON t ((data ->> 'numericTotal'));"),
        "CREATE INDEX mt_doc_decimal_total ON t ((data ->> 'decimalTotal'))"
    );
    assert_eq!(
        canonicalize_statement_text("SELECT 'Boolean flags are character varying'"),
        "SELECT 'boolean flags are varchar'"
    );
}

#[test]
fn test_statement_folds_every_family_member() {
    let canonical_spelling = canonicalize_statement_text("CREATE TABLE t (amount DECIMAL, name VARCHAR, flag BOOLEAN);");
    let catalog_spelling = canonicalize_statement_text("CREATE TABLE t (amount numeric, name character varying, flag boolean)");

    assert_eq!(canonical_spelling, "CREATE TABLE t (amount decimal, name varchar, flag boolean)");
    assert_eq!(canonical_spelling, catalog_spelling);

    for raw in ["DECIMAL", "Decimal", "VARCHAR", "VarChar", "NUMERIC", "CHARACTER VARYING", "BOOLEAN"] {
        assert_eq!(canonicalize_statement_text(raw), canonicalize_type_synonym(raw));
    }
}
