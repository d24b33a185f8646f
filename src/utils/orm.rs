use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait,
};

/// Escapes the LIKE wildcards so the term only matches literally.
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Substring match ignoring ASCII case, a NULL column counts as an empty string.
///
/// SQLite's `lower()` only folds ASCII, so the term is folded the same way. Non-ASCII letters
/// have to match exactly.
pub fn contains_ignore_ascii_case<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&term.to_ascii_lowercase()));

    let value: [SimpleExpr; 2] = [Expr::col(column.as_column_ref()).into(), Expr::val("").into()];

    Expr::expr(Func::lower(Func::coalesce(value)))
        .like(LikeExpr::new(pattern).escape('\\'))
}

/// Unicode aware counterpart of [`contains_ignore_ascii_case`] for values already loaded.
pub fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .unwrap_or_default()
        .to_lowercase()
        .contains(&needle.to_lowercase())
}
