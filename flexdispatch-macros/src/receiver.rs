//! `#[receiver]` implementation.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, ItemFn, Path, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[receiver]` macro: `target, token`.
struct ReceiverArgs {
    target: Path,
    token: Expr,
}

impl Parse for ReceiverArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let target: Path = input.parse()?;
        input.parse::<Token![,]>()?;
        let token: Expr = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        Ok(ReceiverArgs { target, token })
    }
}

pub fn receiver_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let ReceiverArgs { target, token } = parse_macro_input!(attr as ReceiverArgs);
    let input = parse_macro_input!(item as ItemFn);
    let fn_name = &input.sig.ident;

    let expanded = quote! {
        #input

        const _: () = {
            fn __target() -> ::std::any::TypeId {
                ::std::any::TypeId::of::<#target>()
            }

            fn __install(dispatcher: &dyn ::std::any::Any) -> ::flexdispatch::Result<()> {
                ::flexdispatch::__private::install_on::<<#target as ::core::ops::Deref>::Target, _>(
                    dispatcher,
                    |d| d.map(#token, #fn_name),
                )
            }

            ::flexdispatch::inventory::submit! {
                ::flexdispatch::__private::ReceiverRegistration {
                    target: __target,
                    install: __install,
                    receiver: concat!(module_path!(), "::", stringify!(#fn_name)),
                }
            }
        };
    };

    TokenStream::from(expanded)
}
