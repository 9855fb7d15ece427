//! `#[dispatcher]` implementation.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, GenericArgument, ItemFn, PathArguments, ReturnType, Type, parse_macro_input,
    spanned::Spanned,
};

/// Type arguments of the delegate's `Dispatch<A, R, T, ..>` return type.
struct DispatchTypes {
    args: Type,
    output: Type,
    token: Type,
}

fn dispatch_types(output: &ReturnType) -> syn::Result<DispatchTypes> {
    let ty = match output {
        ReturnType::Type(_, ty) => ty,
        ReturnType::Default => {
            return Err(syn::Error::new(
                output.span(),
                "dispatcher must return `Dispatch<Args, Output, Token>`",
            ));
        }
    };

    let segment = match &**ty {
        Type::Path(path) => path.path.segments.last(),
        _ => None,
    }
    .filter(|segment| segment.ident == "Dispatch");
    let generics = match segment.map(|s| &s.arguments) {
        Some(PathArguments::AngleBracketed(args)) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty.clone()),
                _ => None,
            })
            .collect::<Vec<_>>(),
        _ => Vec::new(),
    };

    match generics.as_slice() {
        [args, output, token, ..] => Ok(DispatchTypes {
            args: args.clone(),
            output: output.clone(),
            token: token.clone(),
        }),
        _ => Err(syn::Error::new_spanned(
            ty,
            "dispatcher must return `Dispatch<Args, Output, Token>`",
        )),
    }
}

fn referent(arg: &FnArg) -> syn::Result<&Type> {
    match arg {
        FnArg::Typed(pat_type) => match &*pat_type.ty {
            Type::Reference(reference) => Ok(&reference.elem),
            other => Err(syn::Error::new_spanned(
                other,
                "dispatcher arguments must be references (&Args)",
            )),
        },
        FnArg::Receiver(receiver) => Err(syn::Error::new_spanned(
            receiver,
            "dispatcher cannot take `self`; take the instance as `&Type` instead",
        )),
    }
}

pub fn dispatcher_impl(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let fn_attrs = &input.attrs;
    let inputs = &input.sig.inputs;
    let ret = &input.sig.output;

    if !input.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.generics,
            "dispatcher delegates cannot be generic",
        ));
    }
    if let Some(where_clause) = &input.sig.generics.where_clause {
        return Err(syn::Error::new_spanned(
            where_clause,
            "dispatcher delegates cannot have a where clause",
        ));
    }

    let DispatchTypes {
        args,
        output,
        token,
    } = dispatch_types(ret)?;

    let (dispatcher_ty, inline_fn) = match inputs.len() {
        1 => {
            referent(&inputs[0])?;
            (
                quote! { ::flexdispatch::Dispatcher<#args, #output, #token> },
                quote! {
                    /// Outcome invoking `f` with the call arguments.
                    #fn_vis fn inline<F>(f: F) -> ::flexdispatch::Dispatch<#args, #output, #token>
                    where
                        F: ::core::ops::FnOnce(#args) -> #output + 'static,
                    {
                        ::flexdispatch::Dispatch::inline(f)
                    }
                },
            )
        }
        2 => {
            let instance = referent(&inputs[0])?;
            referent(&inputs[1])?;
            (
                quote! { ::flexdispatch::MethodDispatcher<#instance, #args, #output, #token> },
                quote! {
                    /// Outcome invoking `f` with the bound instance and call arguments.
                    #fn_vis fn inline<F>(f: F) -> ::flexdispatch::Dispatch<#args, #output, #token, #instance>
                    where
                        F: ::core::ops::FnOnce(&#instance, #args) -> #output + 'static,
                    {
                        ::flexdispatch::Dispatch::inline_method(f)
                    }
                },
            )
        }
        _ => {
            return Err(syn::Error::new_spanned(
                &input.sig,
                "dispatcher must take `(&Args)` or `(&Instance, &Args)`",
            ));
        }
    };

    Ok(quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Dispatcher declared by `#[flexdispatch::dispatcher]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #fn_name;

        impl #fn_name {
            /// The delegate computing the default dispatch value.
            #(#fn_attrs)*
            #fn_vis fn delegate(#inputs) #ret #fn_block

            /// Outcome returning `value` directly.
            #fn_vis fn static_result(value: #output) #ret {
                ::flexdispatch::Dispatch::Static(value)
            }

            #inline_fn
        }

        impl ::core::ops::Deref for #fn_name {
            type Target = #dispatcher_ty;

            fn deref(&self) -> &Self::Target {
                static DISPATCHER: ::std::sync::LazyLock<#dispatcher_ty> =
                    ::std::sync::LazyLock::new(|| {
                        let dispatcher = <#dispatcher_ty>::named(
                            concat!(module_path!(), "::", stringify!(#fn_name)),
                            #fn_name::delegate,
                        );
                        if let ::core::result::Result::Err(err) =
                            ::flexdispatch::__private::install_receivers::<#fn_name, _>(&dispatcher)
                        {
                            panic!("{err}");
                        }
                        dispatcher
                    });
                &DISPATCHER
            }
        }
    })
}
