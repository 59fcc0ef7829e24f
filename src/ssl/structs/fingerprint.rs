/// SHA-256 over the concatenated DER bytes of a chain, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub [u8; 32]);
