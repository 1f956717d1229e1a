//! Route service wire types.
//!
//! Request:
//! ```json
//! {"origin_icao": "KJFK", "dest_icao": "EGLL"}
//! ```
//!
//! Success body:
//! ```json
//! {"flight_data": {"distance_nm": 2999.1, "ete": "6H 39M"},
//!  "weather": {"condition": "VFR", "visibility": "10 SM", "wind": "270@12KT"},
//!  "path": [[40.64, -73.78], [51.47, -0.45]],
//!  "storm_polygons": [[[45.0, -50.0], [46.0, -48.0], [44.0, -47.0]]],
//!  "coords": {"origin": [40.64, -73.78], "dest": [51.47, -0.45]}}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{
    AirportCoords, FlightData, LatLng, RoutePlanRequest, RoutePlanResponse, WeatherReport,
};
use crate::error::RemoteError;

#[derive(Debug, Serialize)]
pub struct CalculateRouteRequest<'a> {
    pub origin_icao: &'a str,
    pub dest_icao: &'a str,
}

impl<'a> From<&'a RoutePlanRequest> for CalculateRouteRequest<'a> {
    fn from(request: &'a RoutePlanRequest) -> Self {
        Self {
            origin_icao: request.origin.as_str(),
            dest_icao: request.dest.as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalculateRouteResponse {
    pub flight_data: FlightDataDto,
    pub weather: WeatherDto,
    pub path: Vec<LatLng>,
    /// Absent and `null` both mean no hazards.
    #[serde(default)]
    pub storm_polygons: Option<Vec<Vec<LatLng>>>,
    pub coords: CoordsDto,
}

#[derive(Debug, Deserialize)]
pub struct FlightDataDto {
    pub distance_nm: f64,
    pub ete: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherDto {
    pub condition: String,
    pub wind: String,
    #[serde(default)]
    pub visibility: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoordsDto {
    pub origin: LatLng,
    pub dest: LatLng,
}

/// Error body of the service (`HTTPException` detail).
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Every coordinate must be a real position on the globe; the renderer
/// trusts them.
impl TryFrom<CalculateRouteResponse> for RoutePlanResponse {
    type Error = RemoteError;

    fn try_from(dto: CalculateRouteResponse) -> Result<Self, Self::Error> {
        let storm_polygons = dto.storm_polygons.unwrap_or_default();
        let coordinates = dto
            .path
            .iter()
            .chain(storm_polygons.iter().flatten())
            .chain([&dto.coords.origin, &dto.coords.dest]);
        for point in coordinates {
            if !point.is_valid() {
                return Err(RemoteError::MalformedBody(format!(
                    "coordinate out of range: [{}, {}]",
                    point.lat, point.lng
                )));
            }
        }

        Ok(Self {
            flight_data: FlightData {
                distance_nm: dto.flight_data.distance_nm,
                ete: dto.flight_data.ete,
            },
            weather: WeatherReport {
                condition: dto.weather.condition,
                wind: dto.weather.wind,
                visibility: dto.weather.visibility,
            },
            path: dto.path,
            storm_polygons,
            coords: AirportCoords {
                origin: dto.coords.origin,
                dest: dto.coords.dest,
            },
        })
    }
}
