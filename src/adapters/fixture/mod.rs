//! Fixture adapter. In-memory CollectionGateway for offline mode and tests.

pub mod fixture_gateway;

pub use fixture_gateway::{
    FixtureGateway, InjectedFailure, fixture_comment, fixture_post, fixture_user,
};
