//! Scenario tests spanning `herocraft-common` and `herocraft-core`.

mod forge {
    mod assets;
    mod integration;
}
