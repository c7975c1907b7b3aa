use gqlclient::FetchOptions;

use super::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Listing {
    title: String,
}

fn hook_output() -> ClientProps<Listing> {
    let options = ClientOptions::new("http://localhost:3000")
        .with_fetch_options(FetchOptions::new().header("Authorization", "T"));
    ClientProps {
        client: Some(Client::new(options.clone())),
        client_options: Some(options),
        page_props: Listing { title: "Home".to_owned() },
    }
}

#[test]
fn json_nests_page_props_and_omits_client() {
    let json = hook_output().to_json().expect("encode");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(
        value,
        serde_json::json!({
            "clientOptions": {
                "url": "http://localhost:3000",
                "fetchOptions": { "headers": { "Authorization": "T" } }
            },
            "pageProps": { "title": "Home" }
        })
    );
}

#[test]
fn decoded_props_carry_options_but_no_client() {
    let original = hook_output();
    let decoded = ClientProps::<Listing>::from_json(&original.to_json().expect("encode")).expect("decode");

    assert!(decoded.client.is_none());
    assert_eq!(decoded.client_options, original.client_options);
    assert_eq!(decoded.page_props, original.page_props);
}

#[test]
fn from_json_rejects_malformed_payload() {
    let err = ClientProps::<Listing>::from_json("{\"pageProps\": 3}").expect_err("bad payload");
    assert!(matches!(err, Error::Props(_)));
}

#[test]
fn dehydrated_drops_only_the_client() {
    let props = hook_output().dehydrated();
    assert!(props.client.is_none());
    assert!(props.client_options.is_some());
}

#[test]
fn new_props_have_no_client_state() {
    let props = ClientProps::new(Listing::default());
    assert!(props.client.is_none());
    assert!(props.client_options.is_none());
}
