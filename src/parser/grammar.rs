//! Grammar productions
//!
//! ```text
//! expr       -> term expr_prime
//! expr_prime -> '+' term expr_prime | '-' term expr_prime | ε
//! term       -> factor term_prime
//! term_prime -> '*' term | '/' term | ε
//! factor     -> number | id
//! ```
//!
//! Each nonterminal is a function from (remaining tokens, stack) to
//! (remaining tokens, stack). The grammar is LL(1): one token of lookahead
//! picks the alternative and nothing is ever backtracked. Epsilon alternatives
//! push nothing.
//!
//! Recursion depth grows linearly with the number of tokens, since both
//! `expr_prime` and the `term`/`term_prime` pair recurse once per operator.
//! The recursive productions carry their nesting depth and give up with
//! [`SyntaxError::TooDeep`] past [`MAX_NESTING`].

use super::ast::NodeKind;
use super::lexer::{Operator, Token, TokenType};
use super::parse::{AssemblyStack, Expected, SyntaxError, MAX_NESTING};

/// Outcome of one production: the unconsumed tokens and the updated stack.
pub(crate) type Step<'t> = Result<(&'t [Token], AssemblyStack), SyntaxError>;

pub(crate) fn expr(tokens: &[Token], stack: AssemblyStack) -> Step<'_> {
    let (tokens, stack) = term(tokens, stack, 0)?;
    let (tokens, mut stack) = expr_prime(tokens, stack, 0)?;
    stack.reduce();
    Ok((tokens, stack))
}

fn expr_prime(tokens: &[Token], mut stack: AssemblyStack, depth: usize) -> Step<'_> {
    let Some(op) = lookahead(tokens, &[Operator::Plus, Operator::Minus]) else {
        return Ok((tokens, stack));
    };

    let depth = nest(depth)?;
    let (tokens, token) = match_operator(tokens, op)?;
    stack.push(NodeKind::ExprPrime, token);
    let (tokens, stack) = term(tokens, stack, depth)?;
    expr_prime(tokens, stack, depth)
}

fn term(tokens: &[Token], stack: AssemblyStack, depth: usize) -> Step<'_> {
    let (tokens, stack) = factor(tokens, stack)?;
    let (tokens, mut stack) = term_prime(tokens, stack, depth)?;
    stack.reduce();
    Ok((tokens, stack))
}

fn term_prime(tokens: &[Token], mut stack: AssemblyStack, depth: usize) -> Step<'_> {
    let Some(op) = lookahead(tokens, &[Operator::Star, Operator::Slash]) else {
        return Ok((tokens, stack));
    };

    let depth = nest(depth)?;
    let (tokens, token) = match_operator(tokens, op)?;
    stack.push(NodeKind::TermPrime, token);
    term(tokens, stack, depth)
}

fn factor(tokens: &[Token], stack: AssemblyStack) -> Step<'_> {
    let Some(next) = tokens.first() else {
        return Err(SyntaxError::UnexpectedEnd {
            expected: Expected::Factor,
        });
    };

    match next.token_type() {
        TokenType::Number => number(tokens, stack),
        TokenType::Id => id(tokens, stack),
        TokenType::Op | TokenType::Undefined => Err(SyntaxError::NotAFactor {
            found: next.clone(),
        }),
    }
}

fn number(tokens: &[Token], mut stack: AssemblyStack) -> Step<'_> {
    let (tokens, token) = expect_type(tokens, TokenType::Number)?;
    stack.push(NodeKind::Factor, token);
    Ok((tokens, stack))
}

fn id(tokens: &[Token], mut stack: AssemblyStack) -> Step<'_> {
    let (tokens, token) = expect_type(tokens, TokenType::Id)?;
    stack.push(NodeKind::Factor, token);
    Ok((tokens, stack))
}

/// Depth for the next recursive production, or `TooDeep` past the limit.
fn nest(depth: usize) -> Result<usize, SyntaxError> {
    if depth >= MAX_NESTING {
        return Err(SyntaxError::TooDeep { limit: MAX_NESTING });
    }
    Ok(depth + 1)
}

/// The operator among `choices` that the next token spells, if any.
fn lookahead(tokens: &[Token], choices: &[Operator]) -> Option<Operator> {
    let next = tokens.first()?;
    choices.iter().copied().find(|&op| next.is_operator(op))
}

/// Consume the next token if it is the terminal `expected`.
fn match_operator(
    tokens: &[Token],
    expected: Operator,
) -> Result<(&[Token], Token), SyntaxError> {
    match tokens.split_first() {
        Some((next, rest)) if next.is_terminal() && next.is_operator(expected) => {
            Ok((rest, next.clone()))
        }
        Some((next, _)) => Err(SyntaxError::Unexpected {
            expected,
            found: next.clone(),
        }),
        None => Err(SyntaxError::UnexpectedEnd {
            expected: Expected::Operator(expected),
        }),
    }
}

fn expect_type(
    tokens: &[Token],
    expected: TokenType,
) -> Result<(&[Token], Token), SyntaxError> {
    match tokens.split_first() {
        Some((next, rest)) if next.token_type() == expected => Ok((rest, next.clone())),
        Some((next, _)) => Err(SyntaxError::WrongType {
            expected,
            found: next.clone(),
        }),
        None => Err(SyntaxError::UnexpectedEnd {
            expected: Expected::Type(expected),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    #[test]
    fn test_factor_pushes_one_node() {
        let tokens = tokenize("7+a").unwrap();
        let (rest, stack) = factor(&tokens, AssemblyStack::new()).unwrap();
        assert_eq!(rest.len(), 2);
        assert_eq!(stack.pending_texts(), vec!["7"]);
    }

    #[test]
    fn test_factor_errors() {
        assert_eq!(
            factor(&[], AssemblyStack::new()).unwrap_err(),
            SyntaxError::UnexpectedEnd {
                expected: Expected::Factor
            }
        );

        let tokens = tokenize("*z").unwrap();
        assert_eq!(
            factor(&tokens, AssemblyStack::new()).unwrap_err(),
            SyntaxError::NotAFactor {
                found: Token::new("*")
            }
        );
    }

    #[test]
    fn test_number_and_id_check_type() {
        let tokens = tokenize("x").unwrap();
        let err = number(&tokens, AssemblyStack::new()).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::WrongType {
                expected: TokenType::Number,
                found: Token::new("x"),
            }
        );
        assert_eq!(err.to_string(), "expected number, found id 'x'");

        let tokens = tokenize("42").unwrap();
        assert!(matches!(
            id(&tokens, AssemblyStack::new()),
            Err(SyntaxError::WrongType {
                expected: TokenType::Id,
                ..
            })
        ));
        assert_eq!(
            id(&[], AssemblyStack::new()).unwrap_err(),
            SyntaxError::UnexpectedEnd {
                expected: Expected::Type(TokenType::Id)
            }
        );
    }

    #[test]
    fn test_match_operator() {
        let tokens = tokenize("+1").unwrap();
        let (rest, token) = match_operator(&tokens, Operator::Plus).unwrap();
        assert_eq!(token, Token::new("+"));
        assert_eq!(rest, &tokens[1..]);

        assert_eq!(
            match_operator(&tokens, Operator::Minus).unwrap_err(),
            SyntaxError::Unexpected {
                expected: Operator::Minus,
                found: Token::new("+"),
            }
        );

        // Identifiers are not terminals, so they never match
        let tokens = tokenize("a").unwrap();
        assert!(match_operator(&tokens, Operator::Plus).is_err());

        let err = match_operator(&[], Operator::Slash).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnexpectedEnd {
                expected: Expected::Operator(Operator::Slash)
            }
        );
        assert_eq!(err.to_string(), "expected '/', found end of input");
    }

    #[test]
    fn test_epsilon_consumes_nothing() {
        let tokens = tokenize("a").unwrap();
        let (rest, stack) = expr_prime(&tokens, AssemblyStack::new(), 0).unwrap();
        assert_eq!(rest.len(), 1);
        assert!(stack.is_empty());

        let (rest, stack) = term_prime(&[], AssemblyStack::new(), 0).unwrap();
        assert!(rest.is_empty());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_term_folds_multiplicative_chain() {
        let tokens = tokenize("2*y-1").unwrap();
        let (rest, stack) = term(&tokens, AssemblyStack::new(), 0).unwrap();
        assert_eq!(rest, &tokens[3..]);
        assert_eq!(stack.pending_texts(), vec!["*"]);
    }

    #[test]
    fn test_expr_leaves_single_root() {
        let tokens = tokenize("b-b-b").unwrap();
        let (rest, stack) = expr(&tokens, AssemblyStack::new()).unwrap();
        assert!(rest.is_empty());
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.into_tree().unwrap().print_tree(), "--bbb");
    }

    #[test]
    fn test_expr_stops_at_unexpected_token() {
        let tokens = tokenize("a/zz").unwrap();
        let (rest, stack) = expr(&tokens, AssemblyStack::new()).unwrap();
        assert_eq!(rest, &[Token::new("z")]);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_nesting_limit() {
        let at_limit = tokenize(&("a-".repeat(MAX_NESTING) + "a")).unwrap();
        let (rest, stack) = expr(&at_limit, AssemblyStack::new()).unwrap();
        assert!(rest.is_empty());
        assert_eq!(stack.len(), 1);

        let too_deep = tokenize(&("7/".repeat(MAX_NESTING + 1) + "7")).unwrap();
        assert_eq!(
            expr(&too_deep, AssemblyStack::new()).unwrap_err(),
            SyntaxError::TooDeep { limit: MAX_NESTING }
        );

        // Nesting already at the limit rejects the next operator
        let tokens = tokenize("+b").unwrap();
        assert!(matches!(
            expr_prime(&tokens, AssemblyStack::new(), MAX_NESTING),
            Err(SyntaxError::TooDeep { .. })
        ));
    }
}
