use certpilot::ssl::structs::certificate_chain::CertificateChain;
use certpilot::ssl::structs::fingerprint::Fingerprint;
use proptest::prelude::*;
use rustls::pki_types::CertificateDer;

fn chain(entries: &[Vec<u8>]) -> CertificateChain {
    CertificateChain::new(entries.iter().map(|e| CertificateDer::from(e.clone())).collect())
}

fn entries() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 1..64), 1..5)
}

proptest! {
    #[test]
    fn fingerprint_is_deterministic(entries in entries()) {
        prop_assert_eq!(Fingerprint::of(&chain(&entries)), Fingerprint::of(&chain(&entries)));
    }

    #[test]
    fn flipping_any_byte_changes_fingerprint(entries in entries(), pick in any::<prop::sample::Index>(), bit in 0u8..8) {
        let total: usize = entries.iter().map(Vec::len).sum();
        let mut position = pick.index(total);
        let mut flipped = entries.clone();
        for entry in flipped.iter_mut() {
            if position < entry.len() {
                entry[position] ^= 1 << bit;
                break;
            }
            position -= entry.len();
        }
        prop_assert_ne!(Fingerprint::of(&chain(&entries)), Fingerprint::of(&chain(&flipped)));
    }

    #[test]
    fn dropping_an_entry_changes_fingerprint(entries in entries(), extra in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut longer = entries.clone();
        longer.push(extra);
        prop_assert_ne!(Fingerprint::of(&chain(&entries)), Fingerprint::of(&chain(&longer)));
    }

    #[test]
    fn reordering_distinct_entries_changes_fingerprint(first in prop::collection::vec(any::<u8>(), 1..64), second in prop::collection::vec(any::<u8>(), 1..64)) {
        prop_assume!([first.as_slice(), second.as_slice()].concat() != [second.as_slice(), first.as_slice()].concat());
        let forward = Fingerprint::of(&chain(&[first.clone(), second.clone()]));
        let reversed = Fingerprint::of(&chain(&[second, first]));
        prop_assert_ne!(forward, reversed);
    }
}
