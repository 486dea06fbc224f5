use crate::families::{Family, FamilyMask, email, ip, phone, url};
use crate::{ExtractedEntity, Extractor, PatternSet, extract};
use rstest::rstest;

fn texts(family: Family, input: &str) -> Vec<String> {
    family.extractor().extract(input).into_iter().map(|e| e.text).collect()
}

#[rstest]
#[case(Family::Email, "contact me at a@b.com today", &["a@b.com"])]
#[case(Family::Email, "no address here", &[])]
#[case(Family::PhoneNumber, "+1 (212) 555-0100", &["+1 (212) 555-0100"])]
#[case(Family::PhoneNumber, "00 10 00 31 46 D9 E9 11", &[])]
#[case(Family::Ip, "x::1", &[])]
#[case(Family::Ip, "::1", &["::1"])]
#[case(Family::Ip, "server at 192.168.1.10 is up", &["192.168.1.10"])]
#[case(Family::Url, "call at 7.am", &[])]
#[case(Family::Url, "visit https://www.example.com/docs today", &["https://www.example.com/docs"])]
#[case(Family::Mention, "ping @bob and mail a@b.com", &["@bob"])]
#[case(Family::Hashtag, "loving #rust and a#b", &["#rust"])]
#[case(Family::Guid, "id {123e4567-e89b-12d3-a456-426614174000} ok", &["{123e4567-e89b-12d3-a456-426614174000}"])]
fn family_examples(#[case] family: Family, #[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(texts(family, input), expected, "family {family} on {input:?}");
}

#[rstest]
#[case("contact me at a@b.com today", &[("email", "a@b.com")])]
#[case("mail a@b.com or visit www.bing.com", &[("email", "a@b.com"), ("url", "www.bing.com")])]
#[case("see 10.0.0.1 or bing.com/docs", &[("ip", "10.0.0.1"), ("url", "bing.com/docs")])]
#[case("ping @ops or ops@corp.io", &[("mention", "@ops"), ("email", "ops@corp.io")])]
#[case("dashboard at http://10.0.0.7:8080/status", &[("url", "http://10.0.0.7:8080/status"), ("ip", "10.0.0.7")])]
fn mixed_families(#[case] input: &str, #[case] expected: &[(&str, &str)]) {
    let found: Vec<(String, String)> = extract(input).results.into_iter().map(|e| (e.kind, e.text)).collect();
    let expected: Vec<(String, String)> = expected.iter().map(|(k, t)| (k.to_string(), t.to_string())).collect();
    assert_eq!(found, expected, "on {input:?}");
}

#[test]
fn email_entity_carries_span_type_and_tag() {
    let found = Family::Email.extractor().extract("contact me at a@b.com today");
    assert_eq!(
        found,
        vec![ExtractedEntity {
            start: 14,
            length: 7,
            text: "a@b.com".to_string(),
            kind: "email".to_string(),
            data: email::EMAIL.to_string(),
        }]
    );
}

#[test]
fn phone_with_country_code_spans_whole_number() {
    let found = Family::PhoneNumber.extractor().extract("+1 (212) 555-0100");
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].length), (0, 17));
    assert_eq!(found[0].kind, "phonenumber");
    assert_eq!(found[0].data, phone::US);
}

#[test]
fn standalone_ipv6_is_tagged() {
    let found = Family::Ip.extractor().extract("::1");
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].length), (0, 3));
    assert_eq!(found[0].data, ip::IPV6);
}

#[test]
fn ipv4_is_tagged() {
    let found = Family::Ip.extractor().extract("server at 192.168.1.10 is up");
    assert_eq!(found[0].data, ip::IPV4);
    assert_eq!(found[0].start, 10);
}

#[test]
fn url_tag_is_reported() {
    let found = Family::Url.extractor().extract("visit https://www.example.com/docs today");
    assert_eq!(found[0].data, url::URL);
    assert_eq!(found[0].start, 6);
}

#[test]
fn custom_phone_set_absorbs_dialing_prefix() {
    let patterns = PatternSet::new().with(r"\d{3}-\d{3}-\d{4}", phone::US).unwrap();
    let extractor = Extractor::new("phonenumber", patterns).with_post_processor(phone::post_process);

    let found = extractor.extract("011-212-555-0100");
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].length), (0, 16));
    assert_eq!(found[0].text, "011-212-555-0100");
}

#[test]
fn custom_url_set_rejects_time_terms() {
    let patterns = PatternSet::new().with(r"\b\w+\.\w+\b", url::URL).unwrap();
    let extractor = Extractor::new("url", patterns).with_validator(url::is_unambiguous);

    let found = extractor.extract("meet 7.am at bing.com");
    let texts: Vec<&str> = found.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["bing.com"]);
}

#[test]
fn family_names_round_trip() {
    for family in Family::ALL {
        assert_eq!(family.name().parse::<Family>().unwrap(), family);
        assert_eq!(family.extractor().kind(), family.name());
    }
    assert_eq!("phone".parse::<Family>().unwrap(), Family::PhoneNumber);
    assert!("fax".parse::<Family>().is_err());
}

#[test]
fn mask_lists_families_in_order() {
    let mask: FamilyMask = [Family::Url, Family::Email].into_iter().collect();
    let families: Vec<Family> = mask.families().collect();
    assert_eq!(families, vec![Family::Email, Family::Url]);
    assert_eq!(FamilyMask::all().families().count(), Family::ALL.len());
}
