//! Capability composition across adapters, through the public API only.

use std::sync::Arc;
use unspeech_rust::provider::StaticMetadata;
use unspeech_rust::{
    create_un_alibaba_cloud, create_un_elevenlabs, AlibabaCloudOptions, Capabilities, Capability,
    ElevenLabsOptions, Error, RequestParams,
};

#[test]
fn test_metadata_overlay_keeps_speech_and_voice() {
    let overlay = Capabilities::<ElevenLabsOptions, ()>::new()
        .with_metadata(Arc::new(StaticMetadata("my-elevenlabs")));
    let caps = create_un_elevenlabs("k", "http://localhost:5933/v1/").merge(overlay);

    assert_eq!(
        caps.supported(),
        vec![Capability::Speech, Capability::Voice, Capability::Metadata]
    );
    assert_eq!(caps.metadata().unwrap().name, "my-elevenlabs");
    assert_eq!(
        caps.speech("eleven_v3", None).unwrap().model.as_deref(),
        Some("elevenlabs/eleven_v3")
    );
}

#[test]
fn test_later_source_wins() {
    let local = create_un_alibaba_cloud("k1", "http://localhost:5933/v1/");
    let remote = create_un_alibaba_cloud("k2", "https://gw.example.com/v1/");
    let caps = Capabilities::merge_all([local, remote]);

    let params = caps
        .speech("cosyvoice-v1", Some(&AlibabaCloudOptions::default()))
        .unwrap();
    assert_eq!(params.api_key, "k2");
    assert_eq!(params.base_url, "https://gw.example.com/v1/");
}

#[test]
fn test_missing_capability() {
    let caps = create_un_elevenlabs("k", "http://localhost:5933/v1/");
    assert!(matches!(
        caps.metadata(),
        Err(Error::UnsupportedCapability("metadata"))
    ));

    let empty = Capabilities::<(), ()>::default();
    assert!(empty.supported().is_empty());
    assert!(empty.speech("x/y", None).is_err());
}

#[test]
fn test_request_params_wire_shape() {
    let params = create_un_elevenlabs("k", "http://localhost:5933/v1/")
        .voice(None)
        .unwrap();
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["apiKey"], "k");
    assert_eq!(json["baseURL"], "http://localhost:5933/");
    assert_eq!(json["query"], "provider=elevenlabs");
    assert!(json.get("model").is_none());

    let back: RequestParams = serde_json::from_value(json).unwrap();
    assert_eq!(back, params);
}
