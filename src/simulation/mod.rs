pub mod city;
pub mod config;
pub mod events;
pub mod player;
pub mod rng;
pub mod time;
