//! Known-good vectors recorded from earlier protocol runs.

use card_protocol::abi;
use card_protocol::curve;
use card_protocol::encoding::{
    masked_card_from_flat, word_from_str, MaskedCardInput, WirePoint, WireWord, Word,
};
use card_protocol::snark::PUBLIC_INPUTS;
use card_protocol::{CardProtocolError, SnarkProof};

fn word(s: &str) -> Word {
    word_from_str(s).unwrap()
}

fn point(x: &str, y: &str) -> WirePoint {
    WirePoint {
        x: WireWord(word(x)),
        y: WireWord(word(y)),
    }
}

fn public_keys() -> Vec<WirePoint> {
    vec![
        point(
            "0x1c1018979d2b1b19481da75668b69b5db43766689457507bf4e0951832edf114",
            "0x037186a98dcfe1b6a29fe4cb25dc38945b680b9350bf11c9c5be078dfa087995",
        ),
        point(
            "0x00f713c48e8cda27d5dabb68fe5e92a9ad59dbc276b5a407a099192b52514e34",
            "0x286fef04eab062fa4054bfa784c3f416f11e3df91fca4eb75315dd099f2b5471",
        ),
        point(
            "0x170b3f6073aa25291ec30fff6f09c1195045de8a1740fd2c86951520b147ceaf",
            "0x0c8f9f1a44634062ef6cec79a3c9129bcb8316babd709cc5ebdf17ad18de6135",
        ),
        point(
            "0x069a99c86ae73b02d7ee4b4f8ece22cca57e668147efbb967e99ab00ca457404",
            "0x2a8a9d2db35110dbe4612c1c3923f8be057dbceeca9623feb5364b41c48a9855",
        ),
    ]
}

/// `[e2.x, e2.y, e1.x, e1.y]`
fn flat_masked_card() -> [Word; 4] {
    [
        word("0x24020dff6d7a267256b299f2177041b43447ead73bc5c4594098e60ae1f56f55"),
        word("0x1e702d31afd034197dd9590479081edc285a5f26b1427f3924cb5306985faf69"),
        word("0x2b8cfd91b905cae31d41e7dedf4a927ee3bc429aad7e344d59d2810d82876c32"),
        word("0x2aaa6c24a758209e90aced1f10277b762a7c1115dbc0e16ac276fc2c671a861f"),
    ]
}

fn reveal_tokens() -> Vec<WirePoint> {
    vec![
        point(
            "0x132cdc533cb7a808ef809ea508c94336856388ad5b56827ff1f6d2d0a890be00",
            "0x201cddbcaa245f710bfc214f75a85ce4f0b4c6b27226ada41e5a6d031b94e283",
        ),
        point(
            "0x12bff50dc3655855579f4c39c3f2879a886723b2403dd42f3776e528116dd22b",
            "0x0c2dd92778bf7d25e1323177e65e7a6c35088bcb8269dc8a1ddfc71d5fb3483b",
        ),
        point(
            "0x1b3ab4009608e247a33ae549a40ee9340b0aa2e15a2a4beeef2cd7018ad22ae4",
            "0x0d4c11b5cd5b74d64ba2b0eb0b4e14a2ed75463d0948cef720fca9e32c15c57b",
        ),
        point(
            "0x0d63963c79942ec501c1bb3ac733da088c5461b2b993286d9ca463cc1f8c56cd",
            "0x2f4fcc689f324f9f09689e0ccdba6ec24bdff433f1cbb175aadb069522926b01",
        ),
    ]
}

fn snark_public_inputs() -> [Word; PUBLIC_INPUTS] {
    [
        "7352128854079814232961172193688511100938467652834774341537018640509968470264",
        "19728474252532032163676702131895351364313098934427086156813602243041979731593",
        "11002517068372888488854523110977229544610170502106015927522862914672870189927",
        "352307422658699541260347306774021217934610119053983343748464517473253849018",
        "14634768033461582854187110012464718445878357827387488660889291173743117352958",
        "15757834434594317522288384436361162410631041685092078340158295657808102912925",
    ]
    .map(word)
}

fn snark_proof() -> [Word; 8] {
    [
        "14639757723053936486091077794403356648612994510556307300554171777836459203233",
        "20246694126396708203018563740548027855661926132529276548076997335881936431640",
        "10189714267019054455593145215486106914190700664520025397274475374810444583042",
        "15987352974948392387464925138184518889689966740159023253699103772650423265668",
        "15726331014087280384906698905024511720594759651414238836663385518306430258200",
        "21765528274142624345247281108602526569830026135730664972143333610635109097663",
        "2107724035290304330330116408458621474645501458189143582994855880604814354112",
        "14228663451491988475253052287937411541099835022264464353829475748009167709212",
    ]
    .map(word)
}

#[test]
fn aggregate_key_vector() {
    let joint = abi::aggregate_keys(&public_keys()).unwrap();
    assert_eq!(
        joint,
        point(
            "0x1752b4b41ccda158d6ff427c6be1c05aa1a94231fc22fdc59cd64c2a3c213152",
            "0x141404cf07d59feae8b3f344d7431dc4e1cbb0792e5dfe4710eb107af5ef8815",
        )
    );

    let mut reversed = public_keys();
    reversed.reverse();
    assert_eq!(abi::aggregate_keys(&reversed).unwrap(), joint);
}

#[test]
fn unmask_vector() {
    let masked = MaskedCardInput::Flat(flat_masked_card().map(WireWord));
    let card = abi::unmask(&masked, &reveal_tokens()).unwrap();

    assert_eq!(
        card,
        point(
            "0x23118ac889f6ac9172ea3e80a3741abe2cebce374cc96a6d98bfa132cd2b1e97",
            "0x0e7e20b3cb30785b64cd6972e2ddf919db64d03d6cf01456243c5ef2fb766a65",
        )
    );
}

#[test]
fn unmask_vector_in_structured_form() {
    let masked = masked_card_from_flat(&flat_masked_card()).unwrap();
    let structured: MaskedCardInput = serde_json::from_value(serde_json::json!({
        "e1": WirePoint::from(&masked.e1),
        "e2": WirePoint::from(&masked.e2),
    }))
    .unwrap();

    let card = abi::unmask(&structured, &reveal_tokens()).unwrap();
    assert_eq!(
        card.y,
        WireWord(word("0x0e7e20b3cb30785b64cd6972e2ddf919db64d03d6cf01456243c5ef2fb766a65"))
    );
}

#[test]
fn vector_points_are_subgroup_points() {
    for p in public_keys().iter().chain(&reveal_tokens()) {
        assert!(curve::is_on_curve(&p.decode().unwrap()));
    }

    let inputs = snark_public_inputs();
    for pair in inputs.chunks_exact(2) {
        let p = WirePoint {
            x: WireWord(pair[0]),
            y: WireWord(pair[1]),
        };
        assert!(curve::is_on_curve(&p.decode().unwrap()));
    }
}

#[test]
fn snark_proof_vector_decodes() {
    let words = snark_proof();
    let proof = SnarkProof::from_words(&words).unwrap();
    assert_eq!(proof.to_words(), words);
}

#[test]
fn aggregate_rejects_a_tampered_vector_key() {
    let mut keys = public_keys();
    keys[2].y.0[31] ^= 1;

    match abi::aggregate_keys(&keys) {
        Err(CardProtocolError::InvalidPoint(msg)) => {
            assert!(msg.starts_with("public key at index 2"), "{msg}")
        }
        other => panic!("unexpected {other:?}"),
    }
}
