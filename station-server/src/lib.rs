//! Big Island safety-check station finder.
//!
//! A web application that answers: "Where is the nearest vehicle safety
//! inspection station to me?" for locations on the Island of Hawaii.

pub mod cache;
pub mod domain;
pub mod geocode;
pub mod geolocation;
pub mod locator;
pub mod stations;
pub mod web;
