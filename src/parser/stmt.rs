use crate::{
    ast::{
        ast::Stmt,
        statements::{FnDefStmt, ImportStmt, Prototype},
    },
    errors::errors::{DiagnosticSink, Error},
    lexer::{lexer::CharSource, tokens::TokenKind},
    Span,
};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_stmt<S: CharSource, D: DiagnosticSink>(parser: &mut Parser<S, D>) -> Result<Stmt, Error> {
    let stmt_fn = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();
    if let Some(stmt_fn) = stmt_fn {
        return stmt_fn(parser);
    }

    parse_top_level_expr(parser)
}

/// `$module` or `$module:item`. Only one level of nesting is supported.
pub fn parse_import_stmt<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let module_token = parser.expect_error(TokenKind::Identifier, "expected identifier after `$`")?;
    let mut end = module_token.span.end.clone();

    let mut nested = vec![];
    if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        let item_token = parser.expect_error(TokenKind::Identifier, "expected identifier after `:`")?;
        end = item_token.span.end.clone();

        nested.push(ImportStmt {
            module: item_token.text().to_string(),
            nested: vec![],
            span: item_token.span,
        });
    }

    Ok(Stmt::Import(ImportStmt {
        module: module_token.text().to_string(),
        nested,
        span: Span { start, end },
    }))
}

/// Parses `name|Type Type -> Ret 'a ,b =`.
///
/// Each parameter name is introduced by `'` or `,`; which one is used is not
/// recorded. The trailing `=` is consumed.
pub fn parse_prototype<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Prototype, Error> {
    let name_token = parser.expect_error(TokenKind::Identifier, "expected function name in prototype")?;
    parser.expect_error(TokenKind::Pipe, "expected `|` in prototype")?;

    let mut arg_types = vec![];
    while parser.current_token_kind() == TokenKind::Type {
        arg_types.push(parser.advance().text().to_string());
    }

    let mut return_type = None;
    if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        let type_token = parser.expect_error(TokenKind::Type, "expected return type in prototype")?;
        return_type = Some(type_token.text().to_string());
    }

    let mut arg_names = Vec::with_capacity(arg_types.len());
    for _ in 0..arg_types.len() {
        if !matches!(
            parser.current_token_kind(),
            TokenKind::Apostrophe | TokenKind::Comma
        ) {
            return Err(parser.error_at_current("expected `'` or `,` in argument list"));
        }
        parser.advance();

        let arg_token = parser.expect_error(TokenKind::Identifier, "expected argument name")?;
        arg_names.push(arg_token.text().to_string());
    }

    let end = parser.expect_error(TokenKind::Assignment, "expected `=` in prototype")?.span.end;

    Ok(Prototype {
        name: name_token.text().to_string(),
        arg_types,
        arg_names,
        return_type,
        span: Span {
            start: name_token.span.start,
            end,
        },
    })
}

/// `.prototype body`
pub fn parse_fn_def_stmt<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let prototype = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    let span = Span {
        start,
        end: body.get_span().end.clone(),
    };

    Ok(Stmt::Function(FnDefStmt {
        prototype,
        body,
        span,
    }))
}

/// Wraps a bare expression in an anonymous, parameterless function.
pub fn parse_top_level_expr<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Stmt, Error> {
    let body = parse_expr(parser)?;
    let span = body.get_span().clone();

    Ok(Stmt::Function(FnDefStmt {
        prototype: Prototype::anonymous(span.clone()),
        body,
        span,
    }))
}
