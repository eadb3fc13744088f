//! End-to-end tests for building, writing and reading calendar documents.

use std::fs;
use std::path::{Path, PathBuf};

use palmtree_core::{
    codec, CalendarBuilder, CalendarDocument, CalendarError, FeatureCollection, Season, Url, Uuid,
};
use serde_json::{json, Map, Value};

const CALENDAR_ID: &str = "c10b79cf-e9cd-4979-b7e3-c75cf4727275";

const CIRCLE_SITE: &str = "{ \"features\" : [ \
    { \"geometry\" : { \"coordinates\" : [ 128.14453125, -21.0434912168035 ], \
    \"type\" : \"Point\" }, \
    \"type\" : \"Feature\", \"properties\" : \
    { \"point_type\" : \"Circle\", \"radius\" : 877764.340445275 } } ], \
    \"type\" : \"FeatureCollection\" }";

const IMAGE_URL: &str = concat!(
    "http://www.larrakia.csiro.au/images/calendars/",
    "CSIRO_Gulumoerrgin_(Larrakia)_seasonal-calendar_A3(print).jpg"
);

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn croc_features() -> Vec<Map<String, Value>> {
    let feature = json!({
        "featureNameEnglish": "English feature name",
        "speciesName": "Crocodylus porosus Schneider",
        "speciesLink": "http://bie.ala.org.au/species/Crocodylus+porosus",
        "featureName": "Danggalaba - Saltwater Croc",
        "description": "Danggalaba (Saltwater Crocodile) are laying their eggs.",
        "thumbImages": [
            {"url": concat!(
                "http://images.ala.org.au/store/1/5/4/e/",
                "d2480076-2a8f-4750-8990-0344a90be451/thumbnail"
            )},
            {"url": concat!(
                "http://images-dev.ala.org.au/data/images/store/9/d/c/5/",
                "4d1a6d32-61c5-478c-b7bd-46b9a3ad5cd9/thumbnail"
            )}
        ]
    });
    vec![feature.as_object().cloned().unwrap()]
}

fn larrakia() -> CalendarBuilder {
    let mut builder = CalendarBuilder::with_id(Uuid::parse_str(CALENDAR_ID).unwrap());
    builder
        .name("Larrakia")
        .status("published")
        .description("Test1")
        .image_url(&Url::parse(IMAGE_URL).unwrap())
        .organisation("Organisation Name", "URL", "asdsadsa")
        .season(Season::new(
            "Test",
            "rainy",
            "Dalay",
            "January",
            "Monsoon Season",
            croc_features(),
        ))
        .sites(CIRCLE_SITE)
        .unwrap();
    builder
}

#[test]
fn write_single_key_is_22_bytes() {
    let mut map = Map::new();
    map.insert("test".to_string(), json!("value"));
    let mut out = Vec::with_capacity(8096);
    codec::write(&map, &mut out).unwrap();
    assert_eq!(out.len(), 22);
    assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"test\" : \"value\"\n}");
}

#[test]
fn read_fixture_has_16_keys() {
    let file = fs::File::open(fixture("sc-example.json")).unwrap();
    let calendar = codec::read(file).unwrap();
    assert_eq!(calendar.len(), 16);
}

#[test]
fn fixture_reencodes_byte_for_byte() {
    let text = fs::read_to_string(fixture("sc-example.json")).unwrap();
    let doc = CalendarDocument::from_reader(text.as_bytes()).unwrap();
    let mut out = Vec::new();
    doc.write(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), text.trim_end());
}

#[test]
fn fixture_typed_accessors() {
    let file = fs::File::open(fixture("sc-example.json")).unwrap();
    let doc = CalendarDocument::from_reader(file).unwrap();
    assert!(doc.missing_keys().is_empty());
    assert_eq!(doc.calendar_id(), Some(Uuid::parse_str(CALENDAR_ID).unwrap()));
    assert_eq!(doc.organisation().unwrap().contact_name, "Contact Person");
    let seasons = doc.season_records();
    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0].features.len(), 1);
    assert_eq!(seasons[1].months, "October - November");
}

#[test]
fn fluent_builder_document_shape() {
    let mut out = Vec::with_capacity(8096);
    larrakia().build(&mut out).unwrap();

    let doc = CalendarDocument::from_reader(out.as_slice()).unwrap();
    assert_eq!(doc.get("calendarId"), Some(&json!(CALENDAR_ID)));
    assert_eq!(doc.name(), Some("Larrakia"));
    assert_eq!(doc.status(), Some("published"));

    let seasons = doc.seasons().unwrap();
    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0]["seasonNameEnglish"], "Test");
    assert_eq!(seasons[0]["features"][0]["thumbImages"].as_array().unwrap().len(), 2);

    let sites = doc.sites().expect("sites is an object");
    assert_eq!(sites["features"].as_array().unwrap().len(), 1);
    assert_eq!(sites["features"][0]["properties"]["radius"], json!(877764.340445275));
}

#[test]
fn fluent_builder_key_order_follows_calls() {
    let doc = larrakia().into_document();
    let keys: Vec<&str> = doc.as_map().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "name",
            "status",
            "description",
            "imageUrl",
            "organisation",
            "seasons",
            "sites",
            "calendarId"
        ]
    );
}

#[test]
fn sites_from_parsed_collection_matches_text() {
    let collection: FeatureCollection = CIRCLE_SITE.parse().unwrap();
    let mut from_collection = CalendarBuilder::new();
    from_collection.sites(&collection).unwrap();
    let mut from_text = CalendarBuilder::new();
    from_text.sites(CIRCLE_SITE).unwrap();
    assert_eq!(from_collection.tree()["sites"], from_text.tree()["sites"]);
}

#[test]
fn malformed_sites_leave_document_untouched() {
    let mut builder = larrakia();
    let before = builder.tree().clone();
    let err = builder
        .sites("{ \"type\" : \"FeatureCollection\", \"features\" : 7 }")
        .unwrap_err();
    assert!(matches!(err, CalendarError::Format { .. }));
    assert_eq!(builder.tree(), &before);
}

#[test]
fn build_into_failing_sink_is_io_error() {
    struct Full;
    impl std::io::Write for Full {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let err = larrakia().build(Full).unwrap_err();
    assert!(matches!(err, CalendarError::Io(_)));
}
