/// Concatenates supplied slices into one continuous vector.
#[macro_export]
macro_rules! concat_slices {
    ($($slice: expr),+) => {
        [$(&$slice[..]),+].concat()
    }
}

/// Product of pairings of the supplied pairs, i.e. a single final exponentiation for several Miller loops.
/// ```compile_fail
/// multi_pairing! {
///     a, c;
///     b, d
/// }
/// ```
/// Will be transformed to:
/// ```compile_fail
/// E::multi_pairing([a, b], [c, d])
/// ```
#[macro_export]
macro_rules! multi_pairing {
    ($($g1: expr, $g2: expr);+) => {
        $crate::multi_pairing! { using E: $($g1, $g2);+ }
    };
    (using $pairing_engine: path: $($g1: expr, $g2: expr);+) => {
        <$pairing_engine as ark_ec::pairing::Pairing>::multi_pairing(
            [
                $(<$pairing_engine as ark_ec::pairing::Pairing>::G1Prepared::from($g1)),+
            ],
            [
                $(<$pairing_engine as ark_ec::pairing::Pairing>::G2Prepared::from($g2)),+
            ]
        )
    }
}
