//! Macros wiring physical relations between quantity kinds.

/// Generates the operator web for one physical relation between kinds.
///
/// The product form, `impl_relation!(Force = MassUnit * AccelerationUnit)`,
/// emits `Mul` in both operand orders plus the two inverse `Div` impls, so a
/// single invocation covers `F = m·a`, `F = a·m`, `m = F/a`, and `a = F/m`.
///
/// The square form, `impl_relation!(Area = LengthUnit ^ 2)`, emits one `Mul`
/// and one `Div`, avoiding the duplicate impls the product form would produce
/// when both factors are the same kind.
///
/// Every invocation carries a compile-time assertion that the declared
/// relation holds dimensionally.
#[macro_export]
macro_rules! impl_relation {
    // Product of two distinct kinds: Prod = A * B.
    ($prod:ident = $a:ident * $b:ident) => {
        const _: () = assert!(
            <$a as $crate::Unit>::DIMENSIONS
                .multiply(<$b as $crate::Unit>::DIMENSIONS)
                .equals(<$prod as $crate::Unit>::DIMENSIONS),
            "relation is dimensionally inconsistent",
        );

        impl ::core::ops::Mul<$crate::Quantity<$b>> for $crate::Quantity<$a> {
            type Output = $crate::Quantity<$prod>;

            fn mul(self, rhs: $crate::Quantity<$b>) -> Self::Output {
                $crate::Quantity::from_standard(self.value() * rhs.value())
            }
        }

        impl ::core::ops::Mul<$crate::Quantity<$a>> for $crate::Quantity<$b> {
            type Output = $crate::Quantity<$prod>;

            fn mul(self, rhs: $crate::Quantity<$a>) -> Self::Output {
                $crate::Quantity::from_standard(self.value() * rhs.value())
            }
        }

        impl ::core::ops::Div<$crate::Quantity<$a>> for $crate::Quantity<$prod> {
            type Output = $crate::Quantity<$b>;

            fn div(self, rhs: $crate::Quantity<$a>) -> Self::Output {
                $crate::Quantity::from_standard(self.value() / rhs.value())
            }
        }

        impl ::core::ops::Div<$crate::Quantity<$b>> for $crate::Quantity<$prod> {
            type Output = $crate::Quantity<$a>;

            fn div(self, rhs: $crate::Quantity<$b>) -> Self::Output {
                $crate::Quantity::from_standard(self.value() / rhs.value())
            }
        }
    };

    // Square of one kind: Prod = Base ^ 2.
    ($prod:ident = $base:ident ^ 2) => {
        const _: () = assert!(
            <$base as $crate::Unit>::DIMENSIONS
                .multiply(<$base as $crate::Unit>::DIMENSIONS)
                .equals(<$prod as $crate::Unit>::DIMENSIONS),
            "relation is dimensionally inconsistent",
        );

        impl ::core::ops::Mul<$crate::Quantity<$base>> for $crate::Quantity<$base> {
            type Output = $crate::Quantity<$prod>;

            fn mul(self, rhs: $crate::Quantity<$base>) -> Self::Output {
                $crate::Quantity::from_standard(self.value() * rhs.value())
            }
        }

        impl ::core::ops::Div<$crate::Quantity<$base>> for $crate::Quantity<$prod> {
            type Output = $crate::Quantity<$base>;

            fn div(self, rhs: $crate::Quantity<$base>) -> Self::Output {
                $crate::Quantity::from_standard(self.value() / rhs.value())
            }
        }
    };
}
