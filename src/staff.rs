//! The fixed table of staff members who get a placeholder profile picture

use crate::image::PlaceholderSpec;

/// Every placeholder image to generate, in the order that they're generated
pub const STAFF: &[PlaceholderSpec] = &[
    PlaceholderSpec::new(
        "president-maria-osmena.jpg",
        "Dr. Maria Carmen Osmeña\nPresident",
        [52, 73, 94], // Dark blue-gray
    ),
    PlaceholderSpec::new(
        "vp-roberto-santos.jpg",
        "Dr. Roberto Santos\nVP Academic Affairs",
        [41, 128, 185], // Blue
    ),
    PlaceholderSpec::new(
        "dean-elena-rodriguez.jpg",
        "Prof. Elena Rodriguez\nDean of Computer Science",
        [142, 68, 173], // Purple
    ),
    PlaceholderSpec::new(
        "dean-miguel-fernandez.jpg",
        "Dr. Miguel Fernandez\nDean of Business Admin",
        [39, 174, 96], // Green
    ),
    PlaceholderSpec::new(
        "registrar-catherine-lim.jpg",
        "Ms. Catherine Lim\nRegistrar",
        [230, 126, 34], // Orange
    ),
    PlaceholderSpec::new(
        "director-james-garcia.jpg",
        "Mr. James Garcia\nDirector Student Affairs",
        [231, 76, 60], // Red
    ),
    PlaceholderSpec::new(
        "librarian-ana-reyes.jpg",
        "Ms. Ana Reyes\nHead Librarian",
        [155, 89, 182], // Light purple
    ),
    PlaceholderSpec::new(
        "manager-david-cruz.jpg",
        "Engr. David Cruz\nFacilities Manager",
        [46, 204, 113], // Light green
    ),
];
