use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{LitStr, parse_macro_input};

/// Resolves a waveform name to a `wavetab::Waveform` at compile time.
///
/// Misspelled names are reported as compile errors at the literal instead of
/// failing at runtime the way `"...".parse::<Waveform>()` would.
///
/// # Format
///
/// Names are case-insensitive. Accepted names:
/// - `sine` or `sin`
/// - `triangle` or `tri`
/// - `sawtooth`, `saw` or `ramp-up`
/// - `wastooth`, `reverse-sawtooth` or `ramp-down`
/// - `square` or `pulse`
///
/// # Examples
///
/// ```ignore
/// use wavetab::{generate_bipolar, waveform};
///
/// let table = generate_bipolar(waveform!("triangle").function(), 16, 15.0)?;
///
/// // Does not compile:
/// // let w = waveform!("trianlge");
/// ```
#[proc_macro]
pub fn waveform(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    TokenStream::from(expand(&input))
}

fn expand(input: &LitStr) -> TokenStream2 {
    let name = input.value();

    match parse_waveform(&name) {
        Ok(variant) => {
            let ident = syn::Ident::new(variant.ident(), input.span());
            quote! {
                ::wavetab::Waveform::#ident
            }
        }
        Err(e) => {
            let error_msg = format!("Invalid waveform '{}': {}", name, e);
            quote_spanned! {input.span()=>
                compile_error!(#error_msg)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Sine,
    Triangle,
    Sawtooth,
    Wastooth,
    Square,
}

impl Variant {
    fn ident(self) -> &'static str {
        match self {
            Variant::Sine => "Sine",
            Variant::Triangle => "Triangle",
            Variant::Sawtooth => "Sawtooth",
            Variant::Wastooth => "Wastooth",
            Variant::Square => "Square",
        }
    }
}

// Kept in step with `FromStr for Waveform` in the main crate
fn parse_waveform(s: &str) -> Result<Variant, String> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    match s.as_str() {
        "sine" | "sin" => Ok(Variant::Sine),
        "triangle" | "tri" => Ok(Variant::Triangle),
        "sawtooth" | "saw" | "ramp-up" => Ok(Variant::Sawtooth),
        "wastooth" | "reverse-sawtooth" | "ramp-down" => Ok(Variant::Wastooth),
        "square" | "pulse" => Ok(Variant::Square),
        _ => Err(
            "expected one of sine, triangle, sawtooth, wastooth, square".to_string(),
        ),
    }
}
