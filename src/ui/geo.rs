// ---------------------------------------------------------------------------
// Country centroids for the geographic bubble map
// ---------------------------------------------------------------------------

/// Approximate centroid (latitude, longitude) per country name as spelled in
/// catalog `country` cells.
const CENTROIDS: &[(&str, f64, f64)] = &[
    ("Argentina", -34.0, -64.0),
    ("Australia", -25.3, 133.8),
    ("Austria", 47.5, 14.6),
    ("Bangladesh", 23.7, 90.4),
    ("Belgium", 50.5, 4.5),
    ("Brazil", -14.2, -51.9),
    ("Bulgaria", 42.7, 25.5),
    ("Cambodia", 12.6, 104.9),
    ("Canada", 56.1, -106.3),
    ("Chile", -35.7, -71.5),
    ("China", 35.9, 104.2),
    ("Colombia", 4.6, -74.3),
    ("Croatia", 45.1, 15.2),
    ("Cyprus", 35.1, 33.4),
    ("Czech Republic", 49.8, 15.5),
    ("Denmark", 56.3, 9.5),
    ("Egypt", 26.8, 30.8),
    ("Finland", 61.9, 25.7),
    ("France", 46.2, 2.2),
    ("Germany", 51.2, 10.5),
    ("Ghana", 7.9, -1.0),
    ("Greece", 39.1, 21.8),
    ("Hong Kong", 22.3, 114.2),
    ("Hungary", 47.2, 19.5),
    ("Iceland", 64.9, -19.0),
    ("India", 20.6, 78.9),
    ("Indonesia", -0.8, 113.9),
    ("Iran", 32.4, 53.7),
    ("Ireland", 53.4, -8.2),
    ("Israel", 31.0, 34.9),
    ("Italy", 41.9, 12.6),
    ("Japan", 36.2, 138.3),
    ("Jordan", 30.6, 36.2),
    ("Kenya", -0.02, 37.9),
    ("Kuwait", 29.3, 47.5),
    ("Lebanon", 33.9, 35.9),
    ("Luxembourg", 49.8, 6.1),
    ("Malaysia", 4.2, 102.0),
    ("Mexico", 23.6, -102.6),
    ("Morocco", 31.8, -7.1),
    ("Netherlands", 52.1, 5.3),
    ("New Zealand", -40.9, 174.9),
    ("Nigeria", 9.1, 8.7),
    ("Norway", 60.5, 8.5),
    ("Pakistan", 30.4, 69.3),
    ("Peru", -9.2, -75.0),
    ("Philippines", 12.9, 121.8),
    ("Poland", 51.9, 19.1),
    ("Portugal", 39.4, -8.2),
    ("Qatar", 25.4, 51.2),
    ("Romania", 45.9, 25.0),
    ("Russia", 61.5, 105.3),
    ("Saudi Arabia", 23.9, 45.1),
    ("Senegal", 14.5, -14.5),
    ("Serbia", 44.0, 21.0),
    ("Singapore", 1.35, 103.8),
    ("South Africa", -30.6, 22.9),
    ("South Korea", 35.9, 127.8),
    ("Spain", 40.5, -3.7),
    ("Sweden", 60.1, 18.6),
    ("Switzerland", 46.8, 8.2),
    ("Taiwan", 23.7, 121.0),
    ("Thailand", 15.9, 100.9),
    ("Turkey", 38.9, 35.2),
    ("Ukraine", 48.4, 31.2),
    ("United Arab Emirates", 23.4, 53.8),
    ("United Kingdom", 55.4, -3.4),
    ("United States", 37.1, -95.7),
    ("Uruguay", -32.5, -55.8),
    ("Venezuela", 6.4, -66.6),
    ("Vietnam", 14.1, 108.3),
];

/// `[x, y]` position of a country on an equirectangular map (x = longitude,
/// y = latitude), or `None` when the name is not known.
pub fn locate(country: &str) -> Option<[f64; 2]> {
    let country = country.trim();
    CENTROIDS
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(country))
        .map(|&(_, lat, lon)| [lon, lat])
}
