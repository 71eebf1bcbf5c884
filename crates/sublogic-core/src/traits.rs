//! Trait definitions for numeric inputs
//!
//! Opinion constructors accept integers, floats and decimals alike. The
//! conversion into the stored decimal form happens behind [`IntoComponent`].

use rust_decimal::Decimal;

/// A numeric value that can become an opinion component
///
/// Conversion fails for values with no decimal representation (NaN,
/// infinities, magnitudes beyond the decimal range). The error carries the
/// input as rendered for diagnostics.
pub trait IntoComponent {
    /// Convert into an unquantized decimal
    fn into_component(self) -> Result<Decimal, String>;
}

impl IntoComponent for Decimal {
    fn into_component(self) -> Result<Decimal, String> {
        Ok(self)
    }
}

impl IntoComponent for f64 {
    fn into_component(self) -> Result<Decimal, String> {
        Decimal::try_from(self).map_err(|_| self.to_string())
    }
}

impl IntoComponent for f32 {
    fn into_component(self) -> Result<Decimal, String> {
        Decimal::try_from(self).map_err(|_| self.to_string())
    }
}

macro_rules! impl_into_component_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoComponent for $t {
                fn into_component(self) -> Result<Decimal, String> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_component_for_int!(u8, u16, u32, u64, i8, i16, i32, i64);
