//! Reserved and non-reserved words recognized by the word rule.
//!
//! Words absent from a table lex as plain names. Entries are upper case;
//! lookups upper-case the scanned word first.

use std::collections::HashMap;

use crate::lexer::TokenKind;

/// Keyword lookup table, keyed by upper-cased word.
pub type KeywordMap = HashMap<&'static str, TokenKind>;

use TokenKind::{Builtin, Cte, Ddl, Dml, Keyword, Order};

/// Words shared by every dialect.
pub(crate) const COMMON: &[(&str, TokenKind)] = &[
    // Statement kinds
    ("SELECT", Dml),
    ("INSERT", Dml),
    ("UPDATE", Dml),
    ("DELETE", Dml),
    ("REPLACE", Dml),
    ("MERGE", Dml),
    ("UPSERT", Dml),
    ("CREATE", Ddl),
    ("DROP", Ddl),
    ("ALTER", Ddl),
    ("TRUNCATE", Ddl),
    ("WITH", Cte),
    // Ordering
    ("ASC", Order),
    ("DESC", Order),
    // Builtin types
    ("ARRAY", Keyword),
    ("BIGINT", Builtin),
    ("BINARY", Builtin),
    ("BIT", Builtin),
    ("BLOB", Builtin),
    ("BOOLEAN", Builtin),
    ("CHAR", Builtin),
    ("CHARACTER", Builtin),
    ("DATE", Builtin),
    ("DATETIME", Builtin),
    ("DEC", Builtin),
    ("DECIMAL", Builtin),
    ("DOUBLE", Builtin),
    ("FLOAT", Builtin),
    ("INT", Builtin),
    ("INT8", Builtin),
    ("INTEGER", Builtin),
    ("INTERVAL", Builtin),
    ("LONG", Builtin),
    ("NUMBER", Builtin),
    ("NUMERIC", Builtin),
    ("REAL", Builtin),
    ("ROWID", Builtin),
    ("SERIAL", Builtin),
    ("SERIAL8", Builtin),
    ("SIGNED", Builtin),
    ("SMALLINT", Builtin),
    ("SYSDATE", Builtin),
    ("TEXT", Builtin),
    ("TIME", Builtin),
    ("TIMESTAMP", Builtin),
    ("TINYINT", Builtin),
    ("UNSIGNED", Builtin),
    ("VARCHAR", Builtin),
    ("VARCHAR2", Builtin),
    ("VARYING", Builtin),
    // Clauses and modifiers
    ("ABORT", Keyword),
    ("ABSOLUTE", Keyword),
    ("ACCESS", Keyword),
    ("ACTION", Keyword),
    ("ADD", Keyword),
    ("ADMIN", Keyword),
    ("AFTER", Keyword),
    ("AGGREGATE", Keyword),
    ("ALL", Keyword),
    ("ALWAYS", Keyword),
    ("ANALYZE", Keyword),
    ("AND", Keyword),
    ("ANY", Keyword),
    ("AS", Keyword),
    ("ASSERTION", Keyword),
    ("AT", Keyword),
    ("AUTHORIZATION", Keyword),
    ("AUTO_INCREMENT", Keyword),
    ("AUTOINCREMENT", Keyword),
    ("AVG", Keyword),
    ("BEFORE", Keyword),
    ("BEGIN", Keyword),
    ("BETWEEN", Keyword),
    ("BOTH", Keyword),
    ("BREAK", Keyword),
    ("BY", Keyword),
    ("CACHE", Keyword),
    ("CALL", Keyword),
    ("CALLED", Keyword),
    ("CASCADE", Keyword),
    ("CASE", Keyword),
    ("CAST", Keyword),
    ("CATALOG", Keyword),
    ("CHECK", Keyword),
    ("CHECKPOINT", Keyword),
    ("CLOSE", Keyword),
    ("CLUSTER", Keyword),
    ("COALESCE", Keyword),
    ("COLLATE", Keyword),
    ("COLUMN", Keyword),
    ("COLUMNS", Keyword),
    ("COMMENT", Keyword),
    ("COMMIT", Keyword),
    ("COMMITTED", Keyword),
    ("CONCURRENTLY", Keyword),
    ("CONFLICT", Keyword),
    ("CONNECT", Keyword),
    ("CONNECTION", Keyword),
    ("CONSTRAINT", Keyword),
    ("CONSTRAINTS", Keyword),
    ("CONTINUE", Keyword),
    ("CONVERT", Keyword),
    ("COPY", Keyword),
    ("COUNT", Keyword),
    ("CROSS", Keyword),
    ("CUBE", Keyword),
    ("CURRENT", Keyword),
    ("CURRENT_DATE", Keyword),
    ("CURRENT_ROLE", Keyword),
    ("CURRENT_TIME", Keyword),
    ("CURRENT_TIMESTAMP", Keyword),
    ("CURRENT_USER", Keyword),
    ("CURSOR", Keyword),
    ("CYCLE", Keyword),
    ("DATABASE", Keyword),
    ("DAY", Keyword),
    ("DEALLOCATE", Keyword),
    ("DECLARE", Keyword),
    ("DEFAULT", Keyword),
    ("DEFERRABLE", Keyword),
    ("DEFERRED", Keyword),
    ("DEFINER", Keyword),
    ("DELIMITER", Keyword),
    ("DESCRIBE", Keyword),
    ("DETERMINISTIC", Keyword),
    ("DISTINCT", Keyword),
    ("DO", Keyword),
    ("DOMAIN", Keyword),
    ("EACH", Keyword),
    ("ELSE", Keyword),
    ("ELSEIF", Keyword),
    ("ELSIF", Keyword),
    ("ENCODING", Keyword),
    ("END", Keyword),
    ("ESCAPE", Keyword),
    ("EXCEPT", Keyword),
    ("EXCEPTION", Keyword),
    ("EXCLUSIVE", Keyword),
    ("EXECUTE", Keyword),
    ("EXISTS", Keyword),
    ("EXPLAIN", Keyword),
    ("EXTERNAL", Keyword),
    ("EXTRACT", Keyword),
    ("FALSE", Keyword),
    ("FETCH", Keyword),
    ("FIRST", Keyword),
    ("FOLLOWING", Keyword),
    ("FOR", Keyword),
    ("FORCE", Keyword),
    ("FOREIGN", Keyword),
    ("FROM", Keyword),
    ("FULL", Keyword),
    ("FUNCTION", Keyword),
    ("GENERATED", Keyword),
    ("GLOBAL", Keyword),
    ("GOTO", Keyword),
    ("GRANT", Keyword),
    ("GROUP", Keyword),
    ("GROUPING", Keyword),
    ("HANDLER", Keyword),
    ("HAVING", Keyword),
    ("HOUR", Keyword),
    ("IF", Keyword),
    ("IGNORE", Keyword),
    ("ILIKE", Keyword),
    ("IMMEDIATE", Keyword),
    ("IMMUTABLE", Keyword),
    ("IN", Keyword),
    ("INCREMENT", Keyword),
    ("INDEX", Keyword),
    ("INHERITS", Keyword),
    ("INITIALLY", Keyword),
    ("INNER", Keyword),
    ("INOUT", Keyword),
    ("INSTEAD", Keyword),
    ("INTERSECT", Keyword),
    ("INTO", Keyword),
    ("IS", Keyword),
    ("ISNULL", Keyword),
    ("ISOLATION", Keyword),
    ("ITERATE", Keyword),
    ("JOIN", Keyword),
    ("KEY", Keyword),
    ("LANGUAGE", Keyword),
    ("LAST", Keyword),
    ("LATERAL", Keyword),
    ("LEADING", Keyword),
    ("LEAVE", Keyword),
    ("LEFT", Keyword),
    ("LEVEL", Keyword),
    ("LIKE", Keyword),
    ("LIMIT", Keyword),
    ("LISTEN", Keyword),
    ("LOAD", Keyword),
    ("LOCAL", Keyword),
    ("LOCALTIME", Keyword),
    ("LOCALTIMESTAMP", Keyword),
    ("LOCK", Keyword),
    ("LOOP", Keyword),
    ("LOWER", Keyword),
    ("MATCH", Keyword),
    ("MATERIALIZED", Keyword),
    ("MAX", Keyword),
    ("MAXVALUE", Keyword),
    ("MIN", Keyword),
    ("MINUTE", Keyword),
    ("MINVALUE", Keyword),
    ("MODE", Keyword),
    ("MODIFY", Keyword),
    ("MONTH", Keyword),
    ("MOVE", Keyword),
    ("NATIONAL", Keyword),
    ("NATURAL", Keyword),
    ("NCHAR", Keyword),
    ("NEW", Keyword),
    ("NEXT", Keyword),
    ("NO", Keyword),
    ("NONE", Keyword),
    ("NOT", Keyword),
    ("NOTHING", Keyword),
    ("NOTIFY", Keyword),
    ("NOTNULL", Keyword),
    ("NOWAIT", Keyword),
    ("NULL", Keyword),
    ("NULLIF", Keyword),
    ("NULLS", Keyword),
    ("OF", Keyword),
    ("OFF", Keyword),
    ("OFFSET", Keyword),
    ("OLD", Keyword),
    ("ON", Keyword),
    ("ONLY", Keyword),
    ("OPEN", Keyword),
    ("OPTION", Keyword),
    ("OPTIONS", Keyword),
    ("OR", Keyword),
    ("ORDER", Keyword),
    ("OUT", Keyword),
    ("OUTER", Keyword),
    ("OVER", Keyword),
    ("OVERLAPS", Keyword),
    ("OWNER", Keyword),
    ("PARTITION", Keyword),
    ("PASSWORD", Keyword),
    ("PRECEDING", Keyword),
    ("PRECISION", Keyword),
    ("PREPARE", Keyword),
    ("PRESERVE", Keyword),
    ("PRIMARY", Keyword),
    ("PRIOR", Keyword),
    ("PRIVILEGES", Keyword),
    ("PROCEDURE", Keyword),
    ("PUBLIC", Keyword),
    ("RAISE", Keyword),
    ("RANGE", Keyword),
    ("READ", Keyword),
    ("RECURSIVE", Keyword),
    ("REFERENCES", Keyword),
    ("REFRESH", Keyword),
    ("REINDEX", Keyword),
    ("RELEASE", Keyword),
    ("RENAME", Keyword),
    ("REPEAT", Keyword),
    ("REPEATABLE", Keyword),
    ("RESET", Keyword),
    ("RESTART", Keyword),
    ("RESTRICT", Keyword),
    ("RETURN", Keyword),
    ("RETURNING", Keyword),
    ("RETURNS", Keyword),
    ("REVOKE", Keyword),
    ("RIGHT", Keyword),
    ("ROLE", Keyword),
    ("ROLLBACK", Keyword),
    ("ROLLUP", Keyword),
    ("ROUTINE", Keyword),
    ("ROW", Keyword),
    ("ROWS", Keyword),
    ("RULE", Keyword),
    ("SAVEPOINT", Keyword),
    ("SCHEMA", Keyword),
    ("SCROLL", Keyword),
    ("SECOND", Keyword),
    ("SECURITY", Keyword),
    ("SEQUENCE", Keyword),
    ("SERIALIZABLE", Keyword),
    ("SESSION", Keyword),
    ("SESSION_USER", Keyword),
    ("SET", Keyword),
    ("SETOF", Keyword),
    ("SHARE", Keyword),
    ("SHOW", Keyword),
    ("SIMILAR", Keyword),
    ("SOME", Keyword),
    ("SQL", Keyword),
    ("STABLE", Keyword),
    ("START", Keyword),
    ("STATEMENT", Keyword),
    ("STATISTICS", Keyword),
    ("STRICT", Keyword),
    ("SUBSTRING", Keyword),
    ("SUM", Keyword),
    ("SYMMETRIC", Keyword),
    ("SYSTEM_USER", Keyword),
    ("TABLE", Keyword),
    ("TABLESPACE", Keyword),
    ("TEMP", Keyword),
    ("TEMPORARY", Keyword),
    ("THEN", Keyword),
    ("TIES", Keyword),
    ("TO", Keyword),
    ("TRAILING", Keyword),
    ("TRANSACTION", Keyword),
    ("TRIGGER", Keyword),
    ("TRIM", Keyword),
    ("TRUE", Keyword),
    ("TYPE", Keyword),
    ("UNBOUNDED", Keyword),
    ("UNCOMMITTED", Keyword),
    ("UNION", Keyword),
    ("UNIQUE", Keyword),
    ("UNKNOWN", Keyword),
    ("UNLISTEN", Keyword),
    ("UNLOGGED", Keyword),
    ("UNTIL", Keyword),
    ("UPPER", Keyword),
    ("USAGE", Keyword),
    ("USE", Keyword),
    ("USER", Keyword),
    ("USING", Keyword),
    ("VACUUM", Keyword),
    ("VALID", Keyword),
    ("VALUE", Keyword),
    ("VALUES", Keyword),
    ("VARIABLE", Keyword),
    ("VERBOSE", Keyword),
    ("VIEW", Keyword),
    ("VOLATILE", Keyword),
    ("WHEN", Keyword),
    ("WHERE", Keyword),
    ("WHILE", Keyword),
    ("WINDOW", Keyword),
    ("WITHIN", Keyword),
    ("WITHOUT", Keyword),
    ("WORK", Keyword),
    ("WRITE", Keyword),
    ("YEAR", Keyword),
    ("ZONE", Keyword),
];

/// Transact-SQL additions.
pub(crate) const TRANSACT_SQL: &[(&str, TokenKind)] = &[
    ("CLUSTERED", Keyword),
    ("DATETIME2", Builtin),
    ("DATETIMEOFFSET", Builtin),
    ("EXEC", Keyword),
    ("GO", Keyword),
    ("IDENTITY", Keyword),
    ("MONEY", Builtin),
    ("NOCOUNT", Keyword),
    ("NOLOCK", Keyword),
    ("NONCLUSTERED", Keyword),
    ("NTEXT", Builtin),
    ("NVARCHAR", Builtin),
    ("OUTPUT", Keyword),
    ("PIVOT", Keyword),
    ("PRINT", Keyword),
    ("SMALLDATETIME", Builtin),
    ("SMALLMONEY", Builtin),
    ("TOP", Keyword),
    ("TRAN", Keyword),
    ("TRY", Keyword),
    ("UNIQUEIDENTIFIER", Builtin),
    ("UNPIVOT", Keyword),
    ("VARBINARY", Builtin),
];

/// Builds a lookup table from keyword slices. Later slices override
/// earlier ones.
pub(crate) fn build(tables: &[&[(&'static str, TokenKind)]]) -> KeywordMap {
    tables.iter().flat_map(|table| table.iter().copied()).collect()
}
