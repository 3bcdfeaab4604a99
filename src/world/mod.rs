//! World population: friendly NPCs, quest givers and merchants.

pub mod npcs;
