/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::buffer::Dimensions;
use crate::decoder::PpmHeader;

impl Serialize for Dimensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Dimensions", 2)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;

        state.end()
    }
}

impl Serialize for PpmHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PpmHeader", 4)?;

        state.serialize_field("format", crate::decoder::PPM_MAGIC)?;
        state.serialize_field("width", &self.dimensions.width)?;
        state.serialize_field("height", &self.dimensions.height)?;
        state.serialize_field("max_value", &self.max_value)?;

        state.end()
    }
}
