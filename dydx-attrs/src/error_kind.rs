use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// One `name = expr` pair inside `#[error(..)]`.
struct Tag {
    name: Ident,
    value: Expr,
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Tag { name, value: input.parse()? })
    }
}

/// The report pieces collected from `#[error(message = .., labels = [..], help = ..)]`. Every
/// piece is optional.
#[derive(Debug, Default)]
pub struct ReportTags {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ReportTags {
    fn slot(&mut self, name: &Ident) -> Result<&mut Option<Expr>> {
        match name.to_string().as_str() {
            "message" => Ok(&mut self.message),
            "labels" => Ok(&mut self.labels),
            "help" => Ok(&mut self.help),
            other => Err(syn::Error::new_spanned(
                name,
                format!("expected `message`, `labels` or `help`, found `{}`", other),
            )),
        }
    }
}

impl Parse for ReportTags {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut tags = ReportTags::default();
        for Tag { name, value } in Punctuated::<Tag, Token![,]>::parse_terminated(input)? {
            let slot = tags.slot(&name)?;
            if slot.is_some() {
                return Err(syn::Error::new_spanned(name, "this tag is already set"));
            }
            *slot = Some(value);
        }
        Ok(tags)
    }
}

/// Brings the named fields of `self` into scope, so the tag expressions can use them by name.
fn bind_fields(name: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named) => {
            let idents = named.named.iter().filter_map(|field| field.ident.as_ref());
            quote! { let #name { #(#idents),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! {
            name.span() => compile_error!("`ErrorKind` needs named fields or a unit struct");
        },
        Fields::Unit => TokenStream2::new(),
    }
}

/// A struct with `#[derive(ErrorKind)]`, reduced to what the generated `build_report` needs.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub tags: ReportTags,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let item: ItemStruct = input.parse()?;

        let tags = match attrs.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args()?,
            None => ReportTags::default(),
        };

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            tags,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bindings = bind_fields(&self.name, &self.fields);
        let message = self.tags.message
            .as_ref()
            .map_or_else(|| quote! { "an error occurred" }, |message| quote! { #message });
        let labels = self.tags.labels
            .as_ref()
            .map_or_else(|| quote! { [""] }, |labels| quote! { #labels });
        let help = self.tags.help
            .as_ref()
            .map(|help| quote! { report = report.with_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #bindings

                let start = spans.first().map_or(0, |span| span.start);
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(dydx_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    });

                #[allow(unused_mut)]
                let mut report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, start)
                    .with_message(#message)
                    .with_labels(labels);
                #help
                report.finish()
            }
        });
    }
}
