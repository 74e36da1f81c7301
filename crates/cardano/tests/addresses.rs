use bech32::{u5, ToBase32, Variant};

use coins_cardano::{
    errors::{DecodeError, PayloadError},
    payload::{serialize, validate_and_extract},
    Address, AddressError, Discrimination, Kind, LegacyAddress, PublicKey, PublicKeyType,
    ShelleyAddress,
};
use coins_core::enc::{encode_bech32, EncodingError};

const CASES: [(&str, Discrimination, Kind, u8, Option<u8>); 4] = [
    (
        "addr1qvqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqmt2x75",
        Discrimination::Production,
        Kind::Single,
        0x00,
        None,
    ),
    (
        "addr1shllllllllllllllllllllllllllllllllllllllllllllllllll7a9prrj",
        Discrimination::Test,
        Kind::Account,
        0xff,
        None,
    ),
    (
        "addr1qcg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zngl6j4",
        Discrimination::Production,
        Kind::Multisig,
        0x11,
        None,
    ),
    (
        "addr1ssg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zuev2k8",
        Discrimination::Test,
        Kind::Group,
        0x11,
        Some(0x22),
    ),
];

const BYRON: [&str; 3] = [
    "Ae2tdPwUPEZ18ZjTLnLVr9CEvUEUX4eW1LBHbxxxJgxdAYHrDeSCSbCxrvx",
    "Ae2tdPwUPEZ6RUCnjGHFqi59k5WZLiv3HoCCNGCW8SYc5H9srdTzn1bec4W",
    "DdzFFzCqrhssmYoG5Eca1bKZFdGS8d6iag1mU4wbLeYcSPVvBNF2wRG8yhjzQqErbg63N6KJA4DHqha113tjKDpGEwS5x1dT2KfLSbSJ",
];

#[test]
fn it_decodes_and_reencodes_known_addresses() {
    for (text, discrimination, kind, key1, group_key) in CASES.iter().copied() {
        let shelley = Address::decode_current_format(text).unwrap();
        assert_eq!(shelley.discrimination(), discrimination);
        assert_eq!(shelley.kind(), kind);
        assert_eq!(shelley.key1(), &[key1; 32]);
        assert_eq!(shelley.group_key(), group_key.map(|b| [b; 32]).as_ref());

        assert!(Address::is_valid(text));
        let addr: Address = text.parse().unwrap();
        assert_eq!(addr, Address::Shelley(shelley));
        assert_eq!(addr.to_text(), text);
    }
}

#[test]
fn it_round_trips_every_kind_and_network() {
    for discrimination in [Discrimination::Production, Discrimination::Test] {
        for kind in [Kind::Single, Kind::Group, Kind::Account, Kind::Multisig] {
            let group_key = if kind == Kind::Group { Some([0xab; 32]) } else { None };
            let shelley = ShelleyAddress::new(discrimination, kind, [0x5a; 32], group_key).unwrap();
            let text = Address::from(shelley.clone()).to_text();
            assert!(text.starts_with("addr1"));
            assert_eq!(Address::decode_current_format(&text).unwrap(), shelley);
        }
    }
}

#[test]
fn it_validates_extended_key_addresses() {
    let bytes: Vec<u8> = (0u8..64).rev().collect();
    let key = PublicKey::new(&bytes, PublicKeyType::Ed25519Extended).unwrap();
    let addr = Address::from_public_key(&key).unwrap();
    let shelley = addr.as_shelley().unwrap();
    assert_eq!(shelley.discrimination(), Discrimination::Test);
    assert_eq!(shelley.kind(), Kind::Group);
    assert_eq!(&shelley.key1()[..], &bytes[..32]);
    assert_eq!(&shelley.group_key().unwrap()[..], &bytes[32..]);

    let text = addr.to_text();
    assert!(Address::is_valid(&text));
    assert_eq!(Address::decode_current_format(&text).unwrap(), *shelley);

    let short = PublicKey::new(&bytes[..32], PublicKeyType::Ed25519).unwrap();
    assert_eq!(
        Address::from_public_key(&short),
        Err(AddressError::WrongKeyType(PublicKeyType::Ed25519))
    );
}

#[test]
fn it_rejects_garbage() {
    let len34 = "addr1qvqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqwyment";
    let mut bad_checksum = CASES[0].0.to_owned();
    bad_checksum.pop();
    bad_checksum.push('q');

    for s in ["", bad_checksum.as_str(), len34] {
        assert!(!Address::is_valid(s), "{:?} should be invalid", s);
        assert_eq!(s.parse::<Address>(), Err(AddressError::InvalidAddress));
    }
}

#[test]
fn it_classifies_current_format_failures() {
    let group33 = "addr1qsqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq0y6fh2";
    assert_eq!(
        Address::decode_current_format(group33),
        Err(DecodeError::Payload(PayloadError::LengthKindMismatch {
            kind: Kind::Group,
            len: 33
        }))
    );

    let single65 = "addr1qvqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqpajlwz";
    assert_eq!(
        Address::decode_current_format(single65),
        Err(DecodeError::Payload(PayloadError::LengthKindMismatch {
            kind: Kind::Single,
            len: 65
        }))
    );

    let kind7 = "addr1quqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqgvvpj6";
    assert_eq!(
        Address::decode_current_format(kind7),
        Err(DecodeError::Payload(PayloadError::BadKind(7)))
    );

    // 33 bytes leave one padding bit; set it
    let mut words = [0x03u8; 33].to_base32();
    let last = words.len() - 1;
    words[last] = u5::try_from_u8(words[last].to_u8() | 1).unwrap();
    let padded = bech32::encode("addr", words, Variant::Bech32).unwrap();
    assert_eq!(
        Address::decode_current_format(&padded),
        Err(DecodeError::BadBitPacking(EncodingError::BechError(
            bech32::Error::InvalidPadding
        )))
    );
    assert!(!Address::is_valid(&padded));

    let bech32m = bech32::encode("addr", [0x03u8; 33].to_base32(), Variant::Bech32m).unwrap();
    assert_eq!(
        Address::decode_current_format(&bech32m),
        Err(DecodeError::BadEncoding(EncodingError::WrongVariant))
    );
}

#[test]
fn it_agrees_with_the_payload_codec() {
    let payload = serialize(Discrimination::Test, Kind::Single, &[9u8; 32], None);
    let text = encode_bech32("addr", &payload).unwrap();
    let addr: Address = text.parse().unwrap();
    assert_eq!(
        addr.as_shelley().unwrap(),
        &validate_and_extract(&payload).unwrap()
    );
}

#[test]
fn it_falls_back_to_legacy_addresses() {
    for s in BYRON.iter() {
        assert!(Address::decode_current_format(s).is_err());
        assert!(Address::is_valid(s));

        let addr: Address = s.parse().unwrap();
        let legacy = addr.as_legacy().unwrap();
        assert_eq!(legacy, &s.parse::<LegacyAddress>().unwrap());
        assert_eq!(addr.to_text(), *s);
        assert_eq!(addr.to_text(), legacy.to_text());
    }

    let a: Address = BYRON[0].parse().unwrap();
    let b: Address = BYRON[1].parse().unwrap();
    assert_ne!(a, b);
}

#[test]
fn it_rejects_overlong_input_without_decoding_it() {
    let long = "2".repeat(200_000);
    assert!(!Address::is_valid(&long));
    assert_eq!(long.parse::<Address>(), Err(AddressError::InvalidAddress));
}
