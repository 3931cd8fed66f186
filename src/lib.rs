//! Onboarding Wizard - learner profile collection flow
//!
//! This crate implements a 20-step onboarding flow that builds a language
//! learner profile, derives completion and completeness scores after every
//! change, requests recommendation batches at checkpoint steps and summarizes
//! the learner's gaps, strengths and time to goal on completion.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
