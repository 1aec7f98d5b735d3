use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CallExpr, LiteralExpr, SymbolExpr, VarDeclExpr},
        types::Literals,
    },
    errors::errors::{DiagnosticSink, Error, ErrorImpl},
    lexer::{
        lexer::CharSource,
        tokens::{TokenKind, TokenValue},
    },
    Span,
};

use super::parser::Parser;

/// Parses a primary expression followed by any chain of binary operators.
pub fn parse_expr<S: CharSource, D: DiagnosticSink>(parser: &mut Parser<S, D>) -> Result<Expr, Error> {
    let left = parse_primary_expr(parser)?;
    parse_binary_expr(parser, 0, left)
}

pub fn parse_primary_expr<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();

    let nud_fn = parser.get_nud_lookup().get(&token_kind).copied();

    match nud_fn {
        Some(nud_fn) => nud_fn(parser),
        None if token_kind == TokenKind::Invalid => Err(parser.error_at_current("expected an expression")),
        None => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().to_string(),
            },
            parser.get_position(),
        )),
    }
}

/// Precedence climbing over the binary operator tiers.
///
/// Operators of one tier associate to the left. When the operator after the
/// right operand binds tighter than the current one, the right operand first
/// absorbs that tighter chain.
pub fn parse_binary_expr<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
    min_precedence: i32,
    mut left: Expr,
) -> Result<Expr, Error> {
    loop {
        let precedence = parser.current_precedence();
        if precedence < min_precedence {
            return Ok(left);
        }

        let operator = parser.advance().kind;
        let mut right = parse_primary_expr(parser)?;

        if parser.current_precedence() > precedence {
            right = parse_binary_expr(parser, precedence + 1, right)?;
        }

        let span = Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        };

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        });
    }
}

pub fn parse_literal_expr<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Expr, Error> {
    let token = parser.advance();

    let value = match token.value {
        TokenValue::Int(value) => Literals::Int(value),
        TokenValue::Float(value) => Literals::Float(value),
        TokenValue::Text(value) if token.kind == TokenKind::String => Literals::String(value),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.kind.as_str().to_string(),
                },
                token.span.start,
            ))
        }
    };

    Ok(Expr::Literal(LiteralExpr {
        value,
        span: token.span,
    }))
}

/// Parses `name` as a variable, or `name(arg arg ...)` as a call.
///
/// Call arguments are whole expressions with no separator between them.
pub fn parse_identifier_expr<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Expr, Error> {
    let name_token = parser.expect_error(TokenKind::Identifier, "expected identifier")?;
    let callee = name_token.text().to_string();

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Expr::Symbol(SymbolExpr {
            value: callee,
            span: name_token.span,
        }));
    }

    parser.advance();

    let mut arguments = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(parser.error_at_current("expected `)` to close the argument list"));
        }
        arguments.push(parse_expr(parser)?);
    }

    let close = parser.advance();

    Ok(Expr::Call(CallExpr {
        callee,
        arguments,
        span: Span {
            start: name_token.span.start,
            end: close.span.end,
        },
    }))
}

/// Parses `'name [= value]` (immutable) or `,name [= value]` (mutable).
pub fn parse_var_decl_expr<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Expr, Error> {
    let start_token = parser.advance();
    let is_mutable = start_token.kind == TokenKind::Comma;

    let name_token = parser.expect_error(TokenKind::Identifier, "expected identifier after `'` or `,`")?;

    let mut end = name_token.span.end.clone();
    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        let value = parse_expr(parser)?;
        end = value.get_span().end.clone();
        Some(Box::new(value))
    } else {
        None
    };

    Ok(Expr::VarDecl(VarDeclExpr {
        identifier: name_token.text().to_string(),
        is_mutable,
        assigned_value,
        span: Span {
            start: start_token.span.start,
            end,
        },
    }))
}

pub fn parse_grouping_expr<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, "expected `)` after expression")?;

    Ok(expr)
}

/// Comments in expression position are skipped.
pub fn parse_comment_expr<S: CharSource, D: DiagnosticSink>(
    parser: &mut Parser<S, D>,
) -> Result<Expr, Error> {
    parser.advance();
    parse_primary_expr(parser)
}
