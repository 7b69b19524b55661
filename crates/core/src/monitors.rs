use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MixFormat {
    #[default]
    Mono,
    Stereo,
}

impl MixFormat {
    /// Anything other than a stereo spelling is mono.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "stereo" | "estereo" | "estéreo" => MixFormat::Stereo,
            _ => MixFormat::Mono,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MixFormat::Mono => "mono",
            MixFormat::Stereo => "stereo",
        }
    }

    fn width(self) -> usize {
        match self {
            MixFormat::Mono => 1,
            MixFormat::Stereo => 2,
        }
    }
}

/// Output labels for a mix sequence: `"k"` for mono, `"k/k+1"` for stereo,
/// numbered from 1 across the whole sequence.
pub fn channel_labels(formats: &[MixFormat]) -> Vec<String> {
    let mut next = 1;
    formats
        .iter()
        .map(|format| {
            let label = match format {
                MixFormat::Mono => next.to_string(),
                MixFormat::Stereo => format!("{}/{}", next, next + 1),
            };
            next += format.width();
            label
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stereo_mixes_take_two_outputs() {
        let formats = [MixFormat::Stereo, MixFormat::Mono, MixFormat::Stereo];
        assert_eq!(channel_labels(&formats), vec!["1/2", "3", "4/5"]);
        assert!(channel_labels(&[]).is_empty());
    }

    #[test]
    fn unknown_formats_are_mono() {
        assert_eq!(MixFormat::from_label("Stereo"), MixFormat::Stereo);
        assert_eq!(MixFormat::from_label("estéreo"), MixFormat::Stereo);
        assert_eq!(MixFormat::from_label(""), MixFormat::Mono);
        assert_eq!(MixFormat::from_label("quad"), MixFormat::Mono);
    }

    proptest! {
        #[test]
        fn labels_start_after_all_prior_outputs(stereo in proptest::collection::vec(any::<bool>(), 0..40)) {
            let formats: Vec<MixFormat> = stereo
                .iter()
                .map(|s| if *s { MixFormat::Stereo } else { MixFormat::Mono })
                .collect();
            let labels = channel_labels(&formats);
            prop_assert_eq!(labels.len(), formats.len());
            for (i, label) in labels.iter().enumerate() {
                let k = 1 + formats[..i].iter().map(|f| f.width()).sum::<usize>();
                let expected = match formats[i] {
                    MixFormat::Mono => k.to_string(),
                    MixFormat::Stereo => format!("{}/{}", k, k + 1),
                };
                prop_assert_eq!(label, &expected);
            }
        }
    }
}
