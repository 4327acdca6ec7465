//! Form input → model feature vector

use motoprice_types::Result;

use crate::constants::CC_PER_HP;
use crate::model::{Catalog, FeatureVector, FormInput};

/// Convert a displacement in cc to the horsepower unit of the model
pub fn cc_to_hp(cc: f64) -> f64 {
    cc / CC_PER_HP
}

/// Resolve every pick-list label and assemble the model row
///
/// Fails with `UnknownChoice` when a label is not in its table.
pub fn build_features(input: &FormInput, catalog: &Catalog) -> Result<FeatureVector> {
    let make_model = catalog.models.resolve(&input.make_model)?;
    let fuel = catalog.fuels.resolve(&input.fuel)?;
    let gear = catalog.gears.resolve(&input.gear)?;
    let displacement_cc = catalog.engine_sizes.resolve(&input.engine_size)?;

    Ok(FeatureVector {
        mileage: input.mileage_km,
        power: cc_to_hp(displacement_cc as f64),
        make_model,
        date: input.registration_year,
        fuel,
        gear,
    })
}
