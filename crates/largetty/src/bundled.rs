//! FIGlet fonts compiled into the library, one per fallback tier.

macro_rules! fonts {
    ($($name:ident => $file_name:expr,)*) => {
        /// Fonts shipped inside the crate
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum BundledFont {
            $(
                #[doc = concat!("Font `", $file_name, ".flf`")]
                $name,
            )*
        }

        impl BundledFont {
            /// Every bundled font, in declaration order
            pub const ALL: [Self; const { 0 $(+ { _ = $file_name; 1 })* }] = [$(Self::$name),*];

            /// Raw `.flf` contents
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $(Self::$name => include_bytes!(concat!("../fonts/", $file_name, ".flf")),)*
                }
            }

            /// The font id the catalog lists it under
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => $file_name,)*
                }
            }

            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($file_name => Some(Self::$name),)*
                    _ => None,
                }
            }
        }
    };
}

fonts! {
    Standard => "standard",
    Big => "big",
    Small => "small",
    Mini => "mini",
}
