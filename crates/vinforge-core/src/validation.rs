use crate::error::{Error, Result};
use crate::vehicle::VehicleRecord;

/// Validates vehicle rows before they reach the classifier or generator.
///
/// Classification itself never fails; this guard exists so loaders reject
/// rows that would seed the generator with an empty identifier or classify
/// blank strings.
pub fn validate_vehicles(vehicles: &[VehicleRecord]) -> Result<()> {
    for vehicle in vehicles {
        if vehicle.vehicle_id.trim().is_empty() {
            return Err(Error::InvalidRecord(format!(
                "vehicle '{} {}' has an empty vehicle_id",
                vehicle.manufacturer, vehicle.model
            )));
        }
        if vehicle.manufacturer.trim().is_empty() {
            return Err(Error::InvalidRecord(format!(
                "vehicle '{}' has an empty manufacturer",
                vehicle.vehicle_id
            )));
        }
        if vehicle.model.trim().is_empty() {
            return Err(Error::InvalidRecord(format!(
                "vehicle '{}' has an empty model",
                vehicle.vehicle_id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, manufacturer: &str, model: &str) -> VehicleRecord {
        VehicleRecord {
            vehicle_id: id.to_string(),
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            year: 1967,
            body_class: None,
            instance_count: 1,
            data_source: None,
        }
    }

    #[test]
    fn accepts_well_formed_vehicles() {
        let vehicles = vec![vehicle("ford-mustang-1967", "Ford", "Mustang")];
        assert!(validate_vehicles(&vehicles).is_ok());
    }

    #[test]
    fn rejects_blank_identifier() {
        let vehicles = vec![vehicle("  ", "Ford", "Mustang")];
        assert!(matches!(
            validate_vehicles(&vehicles),
            Err(Error::InvalidRecord(_))
        ));
    }

    #[test]
    fn rejects_blank_model() {
        let vehicles = vec![vehicle("ford-unknown-1967", "Ford", "")];
        assert!(matches!(
            validate_vehicles(&vehicles),
            Err(Error::InvalidRecord(_))
        ));
    }
}
