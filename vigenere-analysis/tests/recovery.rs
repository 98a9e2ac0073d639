//! End-to-end recovery of known plaintexts

use vigenere_analysis::{
    break_cipher, column::partition, decrypt, encrypt, reassemble::interleave, Ciphertext,
    FrequencyModel, KeyLengthSearch, NO_KEY, NO_MESSAGE,
};

const SAMPLE_CIPHERTEXT: &str = concat!(
    "KCCPKBGUFDPHQTYAVINRRTMVGRKDNBVFDETDGILTXRGUDDKOTFMBPV",
    "GEGLTGCKQRACQCWDNAWCRXIZAKFTLEWRPTYCQKYVXCHKFTPONCQQRHJVAJUWETMCMSPKQDYH",
    "JVDAHCTRLSVSKCGCZQQDZXGSFRLSWCWSJTBHAFSIASPRJAHKJRJUMVGKMITZHFPDISPZLVLG",
    "WTFPLKKEBDPGCEBSHCTJRWXBAFSPEZQNRWXCVYCGAONWDDKACKAWBBIKFTIOVKCGGHJVLNHI",
    "FFSQESVYCLACNVRWBBIREPBBVFEXOSCDYGZWPFDTKFQIYCWHJVLNHIQIBTKHJVNPIST",
);

const SAMPLE_PLAINTEXT: &str = concat!(
    "ILEARNEDHOWTOCALCULATETHEAMOUNTOFPAPERNEEDEDFORAROOMWHENIWASATSCHOOL",
    "YOUMULTIPLYTHESQUAREFOOTAGEOFTHEWALLSBYTHECUBICCONTENTSOFTHEFLOORAND",
    "CEILINGCOMBINEDANDDOUBLEITYOUTHENALLOWHALFTHETOTALFOROPENINGSSUCHAS",
    "WINDOWSANDDOORSTHENYOUALLOWTHEOTHERHALFFORMATCHINGTHEPATTERNTHENYOU",
    "DOUBLETHEWHOLETHINGAGAINTOGIVEAMARGINOFERRORANDTHENYOUORDERTHEPAPER",
);

#[test]
fn test_sample_ciphertext() {
    let (plaintext, key) = break_cipher(SAMPLE_CIPHERTEXT).unwrap();

    assert_eq!(key, "CRYPTO");
    assert_eq!(plaintext, SAMPLE_PLAINTEXT);
    assert_eq!(decrypt(SAMPLE_CIPHERTEXT, &key).unwrap(), plaintext);
}

#[test]
fn test_round_trip_recovers_key() {
    let search = KeyLengthSearch::default();

    for key in ["LEMON", "KEY", "BAKER", "SECRET", "CRYPTO", "B"] {
        let ciphertext = Ciphertext::parse(&encrypt(SAMPLE_PLAINTEXT, key).unwrap()).unwrap();
        let found = search.search(&ciphertext).unwrap();

        assert_eq!(found.key_length, key.len(), "key {}", key);
        assert_eq!(found.key, key);
        assert_eq!(found.plaintext, SAMPLE_PLAINTEXT);
    }
}

#[test]
fn test_first_fit_prefers_shorter_length() {
    // Under "RUST" both length-2 columns already clear the floor, so the
    // search accepts a wrong length 2 before ever reaching 4.
    let ciphertext = Ciphertext::parse(&encrypt(SAMPLE_PLAINTEXT, "RUST").unwrap()).unwrap();
    let found = KeyLengthSearch::default().search(&ciphertext).unwrap();

    assert_eq!(found.key_length, 2);
    assert_ne!(found.plaintext, SAMPLE_PLAINTEXT);

    let forced = KeyLengthSearch::default()
        .search_with_key_length(&ciphertext, 4)
        .unwrap()
        .unwrap();
    assert_eq!(forced.key, "RUST");
    assert_eq!(forced.plaintext, SAMPLE_PLAINTEXT);
}

#[test]
fn test_lemon_textbook_example() {
    // "ATTACKATDAWN" under "LEMON" is far too short for frequency analysis:
    // only the key length 1 guess is reached, and the plaintext is not recovered.
    let (plaintext, key) = break_cipher("LXFOPVEFRNHR").unwrap();

    assert_eq!(key, "N");
    assert_eq!(plaintext.len(), "ATTACKATDAWN".len());
    assert_ne!(plaintext, "ATTACKATDAWN");
}

#[test]
fn test_partition_then_interleave_is_identity() {
    let residues = Ciphertext::parse(SAMPLE_CIPHERTEXT).unwrap().residues().to_vec();

    for k in [1, 2, 5, 6, 7, 33, residues.len() - 1] {
        let columns = partition(&residues, k);
        assert_eq!(columns.iter().map(Vec::len).sum::<usize>(), residues.len());
        assert_eq!(interleave(&columns), residues);
    }
}

#[test]
fn test_strict_threshold_yields_sentinel() {
    // No column can score above 1.0, so nothing is ever accepted
    let search = KeyLengthSearch::new(FrequencyModel::english().with_threshold(1.0).unwrap());
    let ciphertext = Ciphertext::parse(SAMPLE_CIPHERTEXT).unwrap();

    assert!(search.search(&ciphertext).is_none());
    assert_eq!(
        break_cipher("Z").unwrap(),
        (NO_MESSAGE.to_string(), NO_KEY.to_string())
    );
}
