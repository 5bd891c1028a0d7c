use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{trim_f64, Distance};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A point on the globe. Longitude is x, latitude is y.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: trim_f64(lon),
            latitude: trim_f64(lat),
        }
    }

    /// Haversine distance along the surface of the earth.
    pub fn gps_dist(self, other: LonLat) -> Distance {
        let lon1 = self.longitude.to_radians();
        let lon2 = other.longitude.to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let delta_lat = lat2 - lat1;
        let delta_lon = lon2 - lon1;

        // Rounding can push this just past 1 for nearly antipodal points
        let a = ((delta_lat / 2.0).sin().powi(2)
            + (delta_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos())
        .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Distance::meters(EARTH_RADIUS_METERS * c)
    }

    /// Straight-line distance in raw degrees, treating longitude and latitude as a flat plane.
    /// Only good for rough estimates over short spans.
    pub fn planar_degrees(self, other: LonLat) -> f64 {
        let dlat = other.latitude - self.latitude;
        let dlon = other.longitude - self.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }

    /// The point `pct` of the way from `self` to `other`, interpolating in degrees.
    pub fn lerp(self, other: LonLat, pct: f64) -> LonLat {
        LonLat::new(
            self.longitude + pct * (other.longitude - self.longitude),
            self.latitude + pct * (other.latitude - self.latitude),
        )
    }

    /// Shifts the point by some number of degrees.
    pub fn offset(self, dlon: f64, dlat: f64) -> LonLat {
        LonLat::new(self.longitude + dlon, self.latitude + dlat)
    }

    pub fn center(pts: &[LonLat]) -> LonLat {
        let mut lon = 0.0;
        let mut lat = 0.0;
        for pt in pts {
            lon += pt.longitude;
            lat += pt.latitude;
        }
        let len = pts.len() as f64;
        LonLat::new(lon / len, lat / len)
    }

    /// Parses "longitude,latitude".
    ///
    /// ```
    /// use geom::LonLat;
    /// assert_eq!(LonLat::parse("77.2090,28.6139").unwrap(), LonLat::new(77.209, 28.6139));
    /// assert!(LonLat::parse("77.2").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<LonLat> {
        let parts: Vec<&str> = input.split(',').map(|x| x.trim()).collect();
        if parts.len() != 2 {
            bail!("{} isn't of the form longitude,latitude", input);
        }
        let lon: f64 = parts[0].parse()?;
        let lat: f64 = parts[1].parse()?;
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            bail!("{} is out of range", input);
        }
        Ok(LonLat::new(lon, lat))
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({0}, {1})", self.longitude, self.latitude)
    }
}

impl std::str::FromStr for LonLat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<LonLat> {
        LonLat::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine() {
        // Delhi to Agra is roughly 180km as the crow flies
        let delhi = LonLat::new(77.2090, 28.6139);
        let agra = LonLat::new(78.0081, 27.1767);
        let km = delhi.gps_dist(agra).to_km();
        assert!(km > 175.0 && km < 185.0, "got {}", km);

        assert_eq!(delhi.gps_dist(delhi), Distance::ZERO);
    }

    #[test]
    fn antipodes() {
        // Half the circumference, about 20,015km
        let half = std::f64::consts::PI * EARTH_RADIUS_METERS;
        for (lon, lat) in [(-100.0, -5.5), (0.0, 0.0), (45.0, 89.0), (179.5, -30.25)] {
            let a = LonLat::new(lon, lat);
            let b = LonLat::new(lon + 180.0, -lat);
            let d = a.gps_dist(b).inner_meters();
            assert!((d - half).abs() < 1.0, "{} to {} is {}", a, b, d);
        }
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon < 180.0 {
                let d = LonLat::new(lon, lat).gps_dist(LonLat::new(lon + 180.0, -lat));
                assert!(d.inner_meters() <= half + 1.0);
                lon += 2.0;
            }
            lat += 0.5;
        }
    }

    #[test]
    fn planar() {
        let a = LonLat::new(0.0, 0.0);
        let b = LonLat::new(3.0, 4.0);
        assert_eq!(a.planar_degrees(b), 5.0);
        assert_eq!(b.planar_degrees(a), 5.0);
    }

    #[test]
    fn center_and_lerp() {
        let a = LonLat::new(10.0, 20.0);
        let b = LonLat::new(12.0, 22.0);
        assert_eq!(LonLat::center(&[a, b]), LonLat::new(11.0, 21.0));
        assert_eq!(a.lerp(b, 0.5), LonLat::new(11.0, 21.0));
        assert_eq!(a.lerp(b, 0.0), a);
    }
}
