mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Implements `dydx_error::ErrorKind` for a unit struct or a struct with named fields.
///
/// The report is described by an optional `#[error(..)]` attribute holding `name = expr` tags,
/// each at most once:
///
/// - `message`: the headline of the report. Defaults to `"an error occurred"`.
/// - `labels`: an array with one text per span of the error, in span order. Extra texts or extra
///   spans are ignored, and an empty text leaves its span unlabeled.
/// - `help`: a hint printed under the report.
///
/// The tag expressions may be anything that implements [`ToString`], and they can name the
/// struct's fields directly:
///
/// ```
/// use dydx_attrs::ErrorKind;
/// use dydx_error::Error;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("cannot divide `{}` by zero", numerator),
///     labels = ["this numerator", "this divisor"],
///     help = "check the divisor before dividing",
/// )]
/// pub struct DivideByZero {
///     numerator: String,
/// }
///
/// let err = Error::new(vec![0..1, 4..5], DivideByZero { numerator: "x".to_string() });
/// let report = err.report_to_string("x / 0");
/// assert!(report.contains("cannot divide"));
/// ```
///
/// Tuple structs are rejected with a compile error.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl dydx_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
