/// Declares a closed category table.
///
/// Every variant gets a display label which is also its wire form, so
/// `ProductCategory::FoodBeverage` serializes as `"Food & Beverage"`.
/// The generated enum implements [`crate::enums::Categorical`] and `Display`.
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::enums::Categorical for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::Categorical::label(self))
            }
        }
    };
}
