//! Oracle datum schema.
//!
//! The oracle publishes one record per farm, carried inline on the UTxO
//! that holds the farm's oracle NFT. The record is a plain 7-tuple; the
//! trailing field is free-form Data so deployments can attach extra
//! payloads without a schema change.

use crate::data::{fixed, PlutusData};
use crate::error::DataError;
use crate::schema::{FromPlutusData, ToPlutusData};

/// Oracle record for one farm.
///
/// `farm_area` is fixed-point (area × 10²); `farm_borders` is an IPFS
/// content hash; `sustainability_index` ranges 0–100.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OracleDatum {
    pub farmer_id: Vec<u8>,
    pub farm_id: Vec<u8>,
    pub ae_id: Vec<u8>,
    pub farm_area: i128,
    pub farm_borders: Vec<u8>,
    pub sustainability_index: i128,
    pub additional_data: PlutusData,
}

impl ToPlutusData for OracleDatum {
    fn to_plutus_data(&self) -> PlutusData {
        PlutusData::List(vec![
            PlutusData::bytes(self.farmer_id.clone()),
            PlutusData::bytes(self.farm_id.clone()),
            PlutusData::bytes(self.ae_id.clone()),
            PlutusData::int(self.farm_area),
            PlutusData::bytes(self.farm_borders.clone()),
            PlutusData::int(self.sustainability_index),
            self.additional_data.clone(),
        ])
    }
}

impl FromPlutusData for OracleDatum {
    fn from_plutus_data(data: PlutusData) -> Result<Self, DataError> {
        let [farmer_id, farm_id, ae_id, farm_area, farm_borders, sustainability_index, additional_data] =
            fixed::<7>(data.expect_list()?)?;
        Ok(OracleDatum {
            farmer_id: farmer_id.expect_bytes()?,
            farm_id: farm_id.expect_bytes()?,
            ae_id: ae_id.expect_bytes()?,
            farm_area: farm_area.expect_int()?,
            farm_borders: farm_borders.expect_bytes()?,
            sustainability_index: sustainability_index.expect_int()?,
            additional_data,
        })
    }
}
