use super::godan::{Row, Sound};
use super::{conjugate, FormKey, Formality, Inflections, Polarity, Tense};
use crate::verb::{Class, Regular, Verb};

use Formality::*;
use Polarity::*;

macro_rules! test_case {
    ($verb:expr, $tense:ident, [$aff_plain:expr, $aff_polite:expr, $neg_plain:expr, $neg_polite:expr $(,)?]) => {{
        let verb = &$verb;
        assert_eq!(conjugate(verb, Tense::$tense, Affirmative, Plain), $aff_plain, "{} {} affirmative plain", verb, Tense::$tense);
        assert_eq!(conjugate(verb, Tense::$tense, Affirmative, Polite), $aff_polite, "{} {} affirmative polite", verb, Tense::$tense);
        assert_eq!(conjugate(verb, Tense::$tense, Negative, Plain), $neg_plain, "{} {} negative plain", verb, Tense::$tense);
        assert_eq!(conjugate(verb, Tense::$tense, Negative, Polite), $neg_polite, "{} {} negative polite", verb, Tense::$tense);
    }};
}

fn taberu() -> Verb {
    Verb::ichidan("食べる", "たべる", "to eat")
}

fn nomu() -> Verb {
    Verb::godan("飲む", "のむ", "to drink")
}

fn kuru() -> Verb {
    Verb::irregular(
        "来る",
        "くる",
        "to come",
        Class::Ichidan,
        [
            (FormKey::new(Tense::Present, Affirmative, Plain), "来る"),
            (FormKey::new(Tense::Present, Negative, Plain), "来ない"),
            (FormKey::new(Tense::Past, Affirmative, Plain), "来た"),
        ],
    )
}

#[test]
fn ichidan() {
    let v = taberu();
    test_case!(v, Present, ["食べる", "食べます", "食べない", "食べません"]);
    test_case!(v, Past, ["食べた", "食べました", "食べなかった", "食べませんでした"]);
    test_case!(v, TeForm, ["食べて", "食べて", "食べなくて", "食べなくて"]);
    test_case!(v, Potential, ["食べられる", "食べられます", "食べられない", "食べられません"]);
    test_case!(v, Passive, ["食べられる", "食べられます", "食べられない", "食べられません"]);
    test_case!(v, Causative, ["食べさせる", "食べさせます", "食べさせない", "食べさせません"]);
    test_case!(v, CausativePassive, ["食べさせられる", "食べさせられます", "食べさせられない", "食べさせられません"]);
    test_case!(v, Imperative, ["食べろ", "食べてください", "食べるな", "食べないでください"]);
    test_case!(v, Volitional, ["食べよう", "食べましょう", "食べないだろう", "食べないでしょう"]);
    test_case!(v, ConditionalBa, ["食べれば", "食べれば", "食べなければ", "食べなければ"]);
    test_case!(v, ConditionalTara, ["食べたら", "食べたら", "食べなかったら", "食べなかったら"]);
    test_case!(v, Progressive, ["食べている", "食べています", "食べていない", "食べていません"]);
    test_case!(v, Desire, ["食べたい", "食べたいです", "食べたくない", "食べたくないです"]);
    test_case!(v, ConditionalNara, ["食べるなら", "食べるなら", "食べないなら", "食べないなら"]);
    test_case!(v, ConditionalTo, ["食べると", "食べると", "食べないと", "食べないと"]);
    test_case!(v, Should, ["食べるべき", "食べるべきです", "食べるべきではない", "食べるべきではありません"]);
    test_case!(v, Must, ["食べなければならない", "食べなければなりません", "食べなくてもいい", "食べなくてもいいです"]);
    test_case!(v, Attemptive, ["食べてみる", "食べてみます", "食べてみない", "食べてみません"]);
    test_case!(v, Preparatory, ["食べておく", "食べておきます", "食べておかない", "食べておきません"]);
    test_case!(v, Regrettable, ["食べてしまう", "食べてしまいます", "食べてしまわない", "食べてしまいません"]);
    test_case!(v, Giving, ["食べてあげる", "食べてあげます", "食べてあげない", "食べてあげません"]);
    test_case!(v, Receiving, ["食べてくれる", "食べてくれます", "食べてくれない", "食べてくれません"]);
    test_case!(v, ReceivingFavor, ["食べてもらう", "食べてもらいます", "食べてもらわない", "食べてもらいません"]);
    test_case!(v, Simultaneous, ["食べながら", "食べながら", "食べないで", "食べないで"]);
    test_case!(v, PurposeGoing, ["食べに行く", "食べに行きます", "食べに行かない", "食べに行きません"]);
    test_case!(v, PurposeComing, ["食べに来る", "食べに来ます", "食べに来ない", "食べに来ません"]);
}

#[test]
fn godan() {
    let v = nomu();
    test_case!(v, Present, ["飲む", "飲みます", "飲まない", "飲みません"]);
    test_case!(v, Past, ["飲んだ", "飲みました", "飲まなかった", "飲みませんでした"]);
    test_case!(v, TeForm, ["飲んで", "飲んで", "飲まなくて", "飲まなくて"]);
    test_case!(v, Potential, ["飲める", "飲めます", "飲めない", "飲めません"]);
    test_case!(v, Passive, ["飲まれる", "飲まれます", "飲まれない", "飲まれません"]);
    test_case!(v, Causative, ["飲ませる", "飲ませます", "飲ませない", "飲ませません"]);
    test_case!(v, CausativePassive, ["飲ませられる", "飲ませられます", "飲ませられない", "飲ませられません"]);
    test_case!(v, Imperative, ["飲め", "飲んでください", "飲むな", "飲まないでください"]);
    test_case!(v, Volitional, ["飲もう", "飲みましょう", "飲まないだろう", "飲まないでしょう"]);
    test_case!(v, ConditionalBa, ["飲めば", "飲めば", "飲まなければ", "飲まなければ"]);
    test_case!(v, ConditionalTara, ["飲んだら", "飲んだら", "飲まなかったら", "飲まなかったら"]);
    test_case!(v, Progressive, ["飲んでいる", "飲んでいます", "飲んでいない", "飲んでいません"]);
    test_case!(v, Desire, ["飲みたい", "飲みたいです", "飲みたくない", "飲みたくないです"]);
    test_case!(v, ConditionalNara, ["飲むなら", "飲むなら", "飲まないなら", "飲まないなら"]);
    test_case!(v, ConditionalTo, ["飲むと", "飲むと", "飲まないと", "飲まないと"]);
    test_case!(v, Should, ["飲むべき", "飲むべきです", "飲むべきではない", "飲むべきではありません"]);
    test_case!(v, Must, ["飲まなければならない", "飲まなければなりません", "飲まなくてもいい", "飲まなくてもいいです"]);
    test_case!(v, Attemptive, ["飲んでみる", "飲んでみます", "飲んでみない", "飲んでみません"]);
    test_case!(v, Preparatory, ["飲んでおく", "飲んでおきます", "飲んでおかない", "飲んでおきません"]);
    test_case!(v, Regrettable, ["飲んでしまう", "飲んでしまいます", "飲んでしまわない", "飲んでしまいません"]);
    test_case!(v, Giving, ["飲んであげる", "飲んであげます", "飲んであげない", "飲んであげません"]);
    test_case!(v, Receiving, ["飲んでくれる", "飲んでくれます", "飲んでくれない", "飲んでくれません"]);
    test_case!(v, ReceivingFavor, ["飲んでもらう", "飲んでもらいます", "飲んでもらわない", "飲んでもらいません"]);
    test_case!(v, Simultaneous, ["飲みながら", "飲みながら", "飲まないで", "飲まないで"]);
    test_case!(v, PurposeGoing, ["飲みに行く", "飲みに行きます", "飲みに行かない", "飲みに行きません"]);
    test_case!(v, PurposeComing, ["飲みに来る", "飲みに来ます", "飲みに来ない", "飲みに来ません"]);
}

#[test]
fn godan_rows() {
    macro_rules! row {
        ($dictionary:literal, $te:literal, $past:literal, $negative:literal, $volitional:literal) => {{
            let v = Verb::godan($dictionary, "", "");
            assert_eq!(conjugate(&v, Tense::TeForm, Affirmative, Plain), $te);
            assert_eq!(conjugate(&v, Tense::Past, Affirmative, Plain), $past);
            assert_eq!(conjugate(&v, Tense::Present, Negative, Plain), $negative);
            assert_eq!(conjugate(&v, Tense::Volitional, Affirmative, Plain), $volitional);
        }};
    }

    row!("買う", "買って", "買った", "買わない", "買おう");
    row!("書く", "書いて", "書いた", "書かない", "書こう");
    row!("泳ぐ", "泳いで", "泳いだ", "泳がない", "泳ごう");
    row!("話す", "話して", "話した", "話さない", "話そう");
    row!("待つ", "待って", "待った", "待たない", "待とう");
    row!("死ぬ", "死んで", "死んだ", "死なない", "死のう");
    row!("遊ぶ", "遊んで", "遊んだ", "遊ばない", "遊ぼう");
    row!("読む", "読んで", "読んだ", "読まない", "読もう");
    row!("帰る", "帰って", "帰った", "帰らない", "帰ろう");
}

#[test]
fn iku_takes_small_tsu() {
    let v = Verb::godan("行く", "いく", "to go");
    test_case!(v, TeForm, ["行って", "行って", "行かなくて", "行かなくて"]);
    test_case!(v, Past, ["行った", "行きました", "行かなかった", "行きませんでした"]);
    test_case!(v, ConditionalTara, ["行ったら", "行ったら", "行かなかったら", "行かなかったら"]);
}

#[test]
fn irregular_overrides_win() {
    let v = kuru();
    assert_eq!(conjugate(&v, Tense::Present, Negative, Plain), "来ない");
    assert_eq!(conjugate(&v, Tense::Past, Affirmative, Plain), "来た");

    let custom = Verb::irregular(
        "来る",
        "くる",
        "to come",
        Class::Ichidan,
        [(FormKey::new(Tense::Past, Affirmative, Plain), "きた")],
    );

    // Overrides are returned verbatim, even when a built-in table exists.
    assert_eq!(conjugate(&custom, Tense::Past, Affirmative, Plain), "きた");
    // Other forms come from the built-in table.
    assert_eq!(conjugate(&custom, Tense::Past, Negative, Plain), "来なかった");
}

#[test]
fn irregular_lexemes() {
    let v = kuru();
    test_case!(v, Imperative, ["来い", "来てください", "来るな", "来ないでください"]);
    test_case!(v, Volitional, ["来よう", "来ましょう", "来まい", "来ないでしょう"]);
    test_case!(v, Must, ["来なければならない", "来なければなりません", "来なくてもいい", "来なくてもいいです"]);

    let suru = Verb::irregular(
        "する",
        "する",
        "to do",
        Class::Godan,
        Vec::<(FormKey, String)>::new(),
    );
    test_case!(suru, Present, ["する", "します", "しない", "しません"]);
    test_case!(suru, Past, ["した", "しました", "しなかった", "しませんでした"]);
    test_case!(suru, Potential, ["できる", "できます", "できない", "できません"]);
    test_case!(suru, ConditionalBa, ["すれば", "すれば", "しなければ", "しなければ"]);
    test_case!(suru, PurposeGoing, ["しに行く", "しに行きます", "しに行かない", "しに行きません"]);

    // The lexeme table applies by dictionary form, whatever the declared class.
    let regular = Verb::ichidan("する", "する", "to do");
    assert_eq!(conjugate(&regular, Tense::TeForm, Affirmative, Plain), "して");
}

#[test]
fn irregular_fallback_class() {
    let aru = Verb::irregular(
        "有る",
        "ある",
        "to exist",
        Class::Godan,
        [(FormKey::new(Tense::Present, Negative, Plain), "ない")],
    );

    assert_eq!(conjugate(&aru, Tense::Present, Negative, Plain), "ない");
    assert_eq!(conjugate(&aru, Tense::Present, Affirmative, Polite), "有ります");
    assert_eq!(conjugate(&aru, Tense::Past, Affirmative, Plain), "有った");

    let ichidan = Verb::irregular(
        "居る",
        "いる",
        "to exist",
        Class::Ichidan,
        Vec::<(FormKey, String)>::new(),
    );

    assert_eq!(conjugate(&ichidan, Tense::Past, Affirmative, Polite), "居ました");
}

#[test]
fn missing_row_degrades_to_dictionary() {
    let v = Verb::Regular(Regular {
        dictionary: "飲む".to_owned(),
        kana: "のむ".to_owned(),
        meaning: "to drink".to_owned(),
        class: Class::Godan,
        row: None,
    });

    for key in FormKey::all() {
        assert_eq!(
            conjugate(&v, key.tense, key.polarity, key.formality),
            "飲む"
        );
    }
}

/// The negative of "must" means "don't have to", a distinct construction
/// rather than "must not".
#[test]
fn must_negative_means_need_not() {
    let v = nomu();
    let must = conjugate(&v, Tense::Must, Affirmative, Plain);
    let need_not = conjugate(&v, Tense::Must, Negative, Plain);

    assert_eq!(must, "飲まなければならない");
    assert_eq!(need_not, "飲まなくてもいい");
    assert!(!need_not.contains("なければ"));
    assert!(!need_not.contains("てはいけない"));

    // "Must" builds on the negative ば conditional.
    let ba = conjugate(&v, Tense::ConditionalBa, Negative, Plain);
    assert_eq!(must, format!("{ba}ならない"));
}

#[test]
fn ichidan_present_is_dictionary() {
    for v in [
        taberu(),
        Verb::ichidan("見る", "みる", "to see"),
        Verb::ichidan("起きる", "おきる", "to wake up"),
    ] {
        assert_eq!(conjugate(&v, Tense::Present, Affirmative, Plain), v.dictionary());
    }
}

#[test]
fn derived_tenses_compose() {
    let verbs = Row::ALL.map(|row| {
        let dictionary = format!("話{}", row.kana());
        Verb::godan(&dictionary, "", "")
    });

    for v in &verbs {
        for polarity in Polarity::ALL {
            for formality in Formality::ALL {
                let past = conjugate(v, Tense::Past, polarity, Plain);
                let present = conjugate(v, Tense::Present, polarity, Plain);

                assert_eq!(
                    conjugate(v, Tense::ConditionalTara, polarity, formality),
                    format!("{past}ら")
                );
                assert_eq!(
                    conjugate(v, Tense::ConditionalNara, polarity, formality),
                    format!("{present}なら")
                );
                assert_eq!(
                    conjugate(v, Tense::ConditionalTo, polarity, formality),
                    format!("{present}と")
                );
            }
        }
    }
}

#[test]
fn godan_forms_use_their_row() {
    const DERIVED: [Tense; 3] = [
        Tense::ConditionalTara,
        Tense::ConditionalNara,
        Tense::ConditionalTo,
    ];

    for row in Row::ALL {
        let dictionary = format!("話{}", row.kana());
        let v = Verb::godan(&dictionary, "", "");
        let table = row.godan();

        let fragments = [Sound::A, Sound::I, Sound::U, Sound::E, Sound::O, Sound::Te, Sound::Ta]
            .map(|sound| table.get(sound).concat());

        for key in FormKey::all().filter(|key| !DERIVED.contains(&key.tense)) {
            let form = conjugate(&v, key.tense, key.polarity, key.formality);

            let rest = form
                .strip_prefix("話")
                .unwrap_or_else(|| panic!("{form} does not start with the consonant stem"));

            assert!(
                fragments.iter().any(|f| rest.starts_with(f.as_str())),
                "{form} ({key}) does not continue with a fragment of row {row}"
            );
        }
    }
}

#[test]
fn conjugation_is_total() {
    let verbs = [
        taberu(),
        nomu(),
        kuru(),
        Verb::godan("行く", "いく", "to go"),
        Verb::irregular("する", "する", "to do", Class::Godan, Vec::<(FormKey, String)>::new()),
    ];

    for v in &verbs {
        let inflections = Inflections::of(v);
        assert_eq!(inflections.inflections.len(), 104);
        assert!(inflections.has_polite());

        for (key, form) in inflections.iter() {
            assert!(!form.is_empty(), "{v} {key} is empty");
        }
    }
}

#[test]
fn form_keys() {
    let key = FormKey::new(Tense::TeForm, Negative, Polite);
    assert_eq!(key.to_string(), "teForm-negative-polite");
    assert_eq!("teForm-negative-polite".parse::<FormKey>(), Ok(key));
    assert!("teForm-negative".parse::<FormKey>().is_err());
    assert!("teForm-negative-polite-extra".parse::<FormKey>().is_err());
    assert!("tea-negative-polite".parse::<FormKey>().is_err());
    assert_eq!(FormKey::all().count(), 104);

    for tense in Tense::ALL {
        assert_eq!(Tense::parse_keyword(tense.ident()), Some(tense));
    }
}

#[test]
fn worked_examples() {
    assert_eq!(conjugate(&taberu(), Tense::Past, Affirmative, Polite), "食べました");

    for formality in Formality::ALL {
        assert_eq!(conjugate(&nomu(), Tense::TeForm, Affirmative, formality), "飲んで");
    }

    assert_eq!(conjugate(&kuru(), Tense::Present, Negative, Plain), "来ない");
}
