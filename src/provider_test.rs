use gqlclient::ClientOptions;

use super::*;

fn client() -> Client {
    Client::new(ClientOptions::new("http://localhost:3000"))
}

#[test]
fn use_client_is_none_without_a_provider() {
    let owner = Owner::new();
    owner.with(|| assert!(use_client().is_none()));
}

#[test]
fn provided_client_is_the_same_instance() {
    let client = client();
    let owner = Owner::new();
    owner.with(|| {
        provide_client(client.clone());
        assert!(use_client().is_some_and(|found| found.ptr_eq(&client)));
        assert!(expect_client().ptr_eq(&client));
    });
}

#[test]
fn descendants_see_the_nearest_client() {
    let outer = client();
    let inner = client();
    let root = Owner::new();
    root.with(|| {
        provide_client(outer.clone());

        let child = Owner::new();
        child.with(|| {
            assert!(expect_client().ptr_eq(&outer));
            provide_client(inner.clone());
            assert!(expect_client().ptr_eq(&inner));
        });

        assert!(expect_client().ptr_eq(&outer));
    });
}
