//! Simple macros for basic RLP impls.

/// Generates [`Encodable`](crate::Encodable) and
/// [`Decodable`](crate::Decodable) impls for a wrapper type.
#[macro_export]
macro_rules! impl_wrapper_encodable {
    ($this:ty => $target:ty) => {
        impl $crate::Encodable for $this {
            fn encode(&self, enc: &mut impl $crate::Encoder) {
                <$target as $crate::Encodable>::encode(&self.0, enc)
            }

            fn encoded_len(&self) -> usize {
                <$target as $crate::Encodable>::encoded_len(&self.0)
            }
        }

        impl $crate::Decodable for $this {
            fn decode_item(item: &$crate::RlpItem) -> $crate::RlpResult<Self> {
                <$target as $crate::Decodable>::decode_item(item).map(Self)
            }
        }
    };
}

/// Generates a struct whose RLP form is the list of its fields, in declaration
/// order.
#[macro_export]
macro_rules! impl_list_struct {
    {
        $( #[ $sattr:meta ] )*
        $v:vis struct $name:ident {
            $(
                $( #[ $fattr:meta ] )*
                $fname:ident : $fty:ty,
            )*
        }
    } => {
        $( #[ $sattr ] )*
        $v struct $name {
            $(
                $( #[ $fattr ] )*
                $fname : $fty,
            )*
        }

        impl $name {
            /// Constructs a new instance from its fields.
            $v fn new($( $fname : $fty ),*) -> Self {
                Self { $( $fname ),* }
            }

            $(
                #[doc = concat!("Returns the `", stringify!($fname), "` field.")]
                $v fn $fname(&self) -> &$fty {
                    &self.$fname
                }
            )*

            fn rlp_payload_len(&self) -> usize {
                0 $( + <$fty as $crate::Encodable>::encoded_len(&self.$fname) )*
            }
        }

        impl $crate::Encodable for $name {
            fn encode(&self, enc: &mut impl $crate::Encoder) {
                $crate::Header::new_list(self.rlp_payload_len()).encode(enc);
                $( <$fty as $crate::Encodable>::encode(&self.$fname, enc); )*
            }

            fn encoded_len(&self) -> usize {
                let payload_len = self.rlp_payload_len();
                $crate::Header::new_list(payload_len).byte_len() + payload_len
            }
        }

        impl $crate::Decodable for $name {
            fn decode_item(item: &$crate::RlpItem) -> $crate::RlpResult<Self> {
                const FIELDS: usize = [$( stringify!($fname) ),*].len();

                let items = item.as_list()?;
                let [$( $fname ),*] = items else {
                    return Err($crate::RlpError::ListLength {
                        expected: FIELDS,
                        found: items.len(),
                    });
                };

                $(
                    let $fname = <$fty as $crate::Decodable>::decode_item($fname)?;
                )*
                Ok(Self::new($($fname),*))
            }
        }
    }
}
