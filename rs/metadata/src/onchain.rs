use crate::error::{malformed, MetadataError};
use crate::field::MetadataField;
use crate::ONCHAIN_CONTENT_FLAG;
use jetton_cell::{Cell, CellBuilder, Dictionary};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;


/// Metadata stored directly in the content cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnchainMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    /// Number of decimal places, in `0..=255`. Stored as a decimal string;
    /// decoding rejects any string that is not a number in that range.
    pub decimals: u8,
}

impl OnchainMetadata {
    /// Returns the textual value of `field` as it is stored in the dictionary.
    pub fn value(&self, field: MetadataField) -> String {
        match field {
            MetadataField::Name => self.name.clone(),
            MetadataField::Symbol => self.symbol.clone(),
            MetadataField::Description => self.description.clone(),
            MetadataField::Image => self.image.clone(),
            MetadataField::Decimals => self.decimals.to_string(),
        }
    }
}

/// Encodes `metadata` as the on-chain flag byte followed by a reference to a
/// dictionary with one snake string per field.
pub fn encode_onchain(metadata: &OnchainMetadata) -> Result<Cell, MetadataError> {
    let mut dict = Dictionary::new();
    for field in MetadataField::iter() {
        let mut value = CellBuilder::new();
        value.store_string_tail(&metadata.value(field))?;
        dict.insert(field.key(), value.build()?)?;
    }

    let mut builder = CellBuilder::new();
    builder
        .store_u8(ONCHAIN_CONTENT_FLAG)?
        .store_reference(dict.serialize()?)?;
    Ok(builder.build()?)
}

pub fn decode_onchain(cell: &Cell) -> Result<OnchainMetadata, MetadataError> {
    let mut slice = cell.parse();
    let flag = slice.load_u8().map_err(malformed)?;
    if flag != ONCHAIN_CONTENT_FLAG {
        return Err(MetadataError::Format(format!(
            "expected on-chain flag {ONCHAIN_CONTENT_FLAG}, found {flag}"
        )));
    }
    let root = slice.load_reference().map_err(|_| {
        MetadataError::Format("on-chain content has no dictionary reference".to_string())
    })?;
    let dict = Dictionary::deserialize(root).map_err(malformed)?;

    let text = |field: MetadataField| -> Result<String, MetadataError> {
        let value = dict
            .get(&field.key())
            .ok_or(MetadataError::MissingField(field))?;
        value.parse().load_string_tail().map_err(malformed)
    };

    let name = text(MetadataField::Name)?;
    let symbol = text(MetadataField::Symbol)?;
    let description = text(MetadataField::Description)?;
    let image = text(MetadataField::Image)?;
    let decimals = text(MetadataField::Decimals)?;
    let decimals = decimals.parse::<u8>().map_err(|err| {
        MetadataError::Format(format!("decimals {decimals:?} is not a valid u8: {err}"))
    })?;

    Ok(OnchainMetadata {
        name,
        symbol,
        description,
        image,
        decimals,
    })
}
