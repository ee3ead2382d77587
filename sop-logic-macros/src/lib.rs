use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// AST for operand expressions
///
/// Chains of one operator are kept flat so they become a single n-ary node.
enum Expr {
    Binding(Ident),
    Identifier(syn::LitStr),
    Constant(bool),
    Invert(Box<Expr>),
    Product(Vec<Expr>),
    Sum(Vec<Expr>),
}

impl Expr {
    /// Generate constructor calls, cloning any `Operand` bindings
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Expr::Binding(ident) => quote! {
                ::core::clone::Clone::clone(&#ident)
            },
            Expr::Identifier(lit) => quote! {
                ::sop_logic::Operand::unresolved(#lit)
            },
            Expr::Constant(value) => quote! {
                ::sop_logic::Operand::resolved(#value)
            },
            Expr::Invert(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! {
                    ::sop_logic::Operand::invert(#inner_tokens)
                }
            }
            Expr::Product(children) => {
                let children_tokens = children.iter().map(Expr::to_tokens);
                quote! {
                    ::sop_logic::Operand::product([#(#children_tokens),*])
                }
            }
            Expr::Sum(children) => {
                let children_tokens = children.iter().map(Expr::to_tokens);
                quote! {
                    ::sop_logic::Operand::sum([#(#children_tokens),*])
                }
            }
        }
    }
}

/// Parser for operand expressions with operator precedence
struct OperandParser {
    expr: Expr,
}

impl Parse for OperandParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr = parse_sum(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected token in operand expression"));
        }
        Ok(OperandParser { expr })
    }
}

/// Parse OR chains (lowest precedence)
fn parse_sum(input: ParseStream) -> Result<Expr> {
    let mut terms = vec![parse_product(input)?];

    while input.peek(Token![+]) || input.peek(Token![|]) {
        if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
        } else {
            input.parse::<Token![|]>()?;
        }
        terms.push(parse_product(input)?);
    }

    Ok(match terms.len() {
        1 => terms.remove(0),
        _ => Expr::Sum(terms),
    })
}

/// Parse AND chains (higher precedence)
fn parse_product(input: ParseStream) -> Result<Expr> {
    let mut factors = vec![parse_unary(input)?];

    while input.peek(Token![*]) || input.peek(Token![&]) {
        if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
        } else {
            input.parse::<Token![&]>()?;
        }
        factors.push(parse_unary(input)?);
    }

    Ok(match factors.len() {
        1 => factors.remove(0),
        _ => Expr::Product(factors),
    })
}

/// Parse NOT (highest precedence) and atoms
fn parse_unary(input: ParseStream) -> Result<Expr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Expr::Invert(Box::new(inner)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        let inner = parse_unary(input)?;
        Ok(Expr::Invert(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

/// Parse bindings, string literals, constants and parenthesised groups
fn parse_atom(input: ParseStream) -> Result<Expr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        let inner = parse_sum(&content)?;
        if !content.is_empty() {
            return Err(content.error("unexpected token in parentheses"));
        }
        Ok(inner)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Expr::Identifier(lit))
    } else if input.peek(syn::LitBool) {
        let lit: syn::LitBool = input.parse()?;
        Ok(Expr::Constant(lit.value))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        let value: u8 = lit.base10_parse()?;
        match value {
            0 => Ok(Expr::Constant(false)),
            1 => Ok(Expr::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        Ok(Expr::Binding(ident))
    }
}

/// The `operand!` procedural macro
///
/// Builds a `sop_logic::Operand` from boolean syntax.
///
/// # Supported Syntax
///
/// - `a` - clone of an `Operand` bound to `a` in scope
/// - `"a"` - `Operand::unresolved("a")`
/// - `0` / `false` - `Operand::resolved(false)`
/// - `1` / `true` - `Operand::resolved(true)`
/// - `!a` or `~a` - `Operand::invert`
/// - `a * b` or `a & b` - `Operand::product`
/// - `a + b` or `a | b` - `Operand::sum`
/// - `(a + b) * c` - grouping
///
/// A chain such as `a * b * c` becomes one product with three children. A
/// parenthesised group is always its own node, so `(a * b) * c` nests.
///
/// # Operator Precedence
///
/// From highest to lowest:
/// 1. `( )`
/// 2. `!` / `~`
/// 3. `*` / `&`
/// 4. `+` / `|`
///
/// # Examples
///
/// ```ignore
/// use sop_logic::{operand, Operand};
///
/// let xor = operand!("a" * !"b" + !"a" * "b");
///
/// let a = Operand::unresolved("a");
/// let b = Operand::unresolved("b");
/// let same = operand!(a * !b + !a * b);
/// assert_eq!(xor, same);
///
/// let always = operand!(a + 1);
/// ```
#[proc_macro]
pub fn operand(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as OperandParser);
    let tokens = parser.expr.to_tokens();
    TokenStream::from(tokens)
}
