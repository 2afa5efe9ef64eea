/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use ppm2png_png::{Compression, FilterMethod};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ICompression {
    Fast,
    Default,
    Best
}

impl ICompression {
    pub const fn to_compression(self) -> Compression {
        match self {
            ICompression::Fast => Compression::Fast,
            ICompression::Default => Compression::Default,
            ICompression::Best => Compression::Best
        }
    }
}

impl ValueEnum for ICompression {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Fast, Self::Default, Self::Best]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Fast => PossibleValue::new("fast"),
            Self::Default => PossibleValue::new("default"),
            Self::Best => PossibleValue::new("best")
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IFilter {
    None,
    Sub,
    Up,
    Avg,
    Paeth,
    Adaptive
}

impl IFilter {
    pub const fn to_filter(self) -> FilterMethod {
        match self {
            IFilter::None => FilterMethod::None,
            IFilter::Sub => FilterMethod::Sub,
            IFilter::Up => FilterMethod::Up,
            IFilter::Avg => FilterMethod::Avg,
            IFilter::Paeth => FilterMethod::Paeth,
            IFilter::Adaptive => FilterMethod::Adaptive
        }
    }
}

impl ValueEnum for IFilter {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::None,
            Self::Sub,
            Self::Up,
            Self::Avg,
            Self::Paeth,
            Self::Adaptive
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::None => PossibleValue::new("none"),
            Self::Sub => PossibleValue::new("sub"),
            Self::Up => PossibleValue::new("up"),
            Self::Avg => PossibleValue::new("avg"),
            Self::Paeth => PossibleValue::new("paeth"),
            Self::Adaptive => PossibleValue::new("adaptive")
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::{ICompression, IFilter};

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(ICompression::from_str("BEST", true), Ok(ICompression::Best));
        assert_eq!(IFilter::from_str("Paeth", true), Ok(IFilter::Paeth));
        assert!(IFilter::from_str("median", true).is_err());
    }
}
