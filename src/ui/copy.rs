//! Static page copy for the home and about views.

/// A headed block of static text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopySection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const BRAND: &str = "SignBridge";

pub const HOME: &[CopySection] = &[
    CopySection {
        heading: "Breaking the Silence Barrier",
        paragraphs: &[
            "Bridging the gap between sign language and spoken word through real-time computer vision and advanced machine learning.",
        ],
    },
    CopySection {
        heading: "Inclusive By Design",
        paragraphs: &[
            "Communication is a fundamental human right. We leverage technology not to replace human connection, but to facilitate it where barriers exist.",
        ],
    },
    CopySection {
        heading: "Computer Vision",
        paragraphs: &[
            "Utilizing OpenCV to track hand landmarks in real-time. Our system maps 21 distinct points on each hand to capture the nuance of every gesture.",
        ],
    },
    CopySection {
        heading: "Neural Processing",
        paragraphs: &[
            "Deep learning models powered by TensorFlow and Keras analyze the spatial and temporal data of hand movements to classify gestures into meaningful linguistic units.",
        ],
    },
    CopySection {
        heading: "Instant Translation",
        paragraphs: &[
            "Converting classified gestures into synthesized speech or readable text instantly, enabling fluid, two-way conversation in any environment.",
        ],
    },
];

/// Shown above the featured use cases on the home page.
pub const FEATURED: CopySection = CopySection {
    heading: "Impact Zones",
    paragraphs: &["Deploying accessibility solutions where they matter most. From classrooms to clinics."],
};

pub const ABOUT: &[CopySection] = &[
    CopySection {
        heading: "About SignBridge",
        paragraphs: &[
            "The Sign Language Recognition Project aims to bridge the communication gap between the hearing and speech-impaired community and the general public by leveraging computer vision and machine learning technologies.",
        ],
    },
    CopySection {
        heading: "Our Mission",
        paragraphs: &[
            "This system recognizes hand gestures used in sign language and translates them into readable text or audible speech in real time.",
            "Accurate recognition: enable accurate recognition of sign language gestures through advanced computer vision algorithms.",
            "Real-time translation: provide real-time translation into text or speech for immediate, natural communication.",
            "Inclusive solutions: promote inclusive communication using modern AI solutions that empower everyone.",
        ],
    },
    CopySection {
        heading: "Technology Stack",
        paragraphs: &[
            "Python: core programming language for the machine learning and computer vision operations.",
            "OpenCV: real-time hand gesture detection and image processing.",
            "TensorFlow and Keras: neural networks for gesture recognition models.",
            "Web technologies: HTML, CSS and JavaScript for the user interface.",
        ],
    },
    CopySection {
        heading: "Core Features",
        paragraphs: &[
            "Real-time detection of hand gestures with minimal latency.",
            "Machine learning classification of detected gestures into specific meanings.",
            "An interface designed for accessibility across technical backgrounds.",
            "High accuracy with fast response times for reliable communication.",
        ],
    },
];
