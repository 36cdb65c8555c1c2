//! Static fixtures used when no API key is configured or mocking is forced.

use crate::youtube::models::{
    ContentDetails, EquipmentComparison, EquipmentType, SkillLevel, Snippet, Statistics,
    YouTubeVideo, YouTubeVideoResponse,
};
use std::thread::sleep;
use std::time::Duration;

pub const MOCK_VIDEO_ID: &str = "wzgsNBKtaE4";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        sleep(latency);
    }
}

/// https://www.youtube.com/watch?v=wzgsNBKtaE4
pub fn mock_video() -> YouTubeVideo {
    YouTubeVideo {
        id: MOCK_VIDEO_ID.to_string(),
        snippet: Snippet {
            title: "Which is better for home gyms, kettlebells or dumbbells?".to_string(),
            channel_title: "Fringe Sport".to_string(),
            channel_id: "UCbq1NSm0kE2gZZWRxXFhe0Q".to_string(),
            category_id: "17".to_string(),
            tags: Some(strings(&[
                "kettlebells",
                "dumbbells",
                "home gym",
                "fitness equipment",
                "strength training",
                "workout equipment",
                "free weights",
                "home workout",
            ])),
            description: Some(
                "A detailed comparison of kettlebells and dumbbells for home gyms. We examine \
                 the pros and cons of each and help you decide which is best for your fitness goals."
                    .to_string(),
            ),
            published_at: None,
        },
        content_details: ContentDetails {
            duration: "PT8M20S".to_string(),
        },
        statistics: Some(Statistics {
            view_count: Some("45829".to_string()),
            like_count: Some("2103".to_string()),
            comment_count: Some("187".to_string()),
        }),
    }
}

pub fn fetch_video_mock(latency: Duration) -> YouTubeVideoResponse {
    simulate_latency(latency);
    YouTubeVideoResponse {
        items: vec![mock_video()],
    }
}

pub fn fetch_equipment_comparison(latency: Duration) -> Vec<EquipmentComparison> {
    simulate_latency(latency);
    vec![
        EquipmentComparison {
            id: "kettlebell-1".to_string(),
            equipment_type: EquipmentType::Kettlebell,
            advantages: strings(&[
                "Great for dynamic, explosive movements",
                "Excellent for full-body workouts",
                "Builds functional strength and stability",
                "Perfect for cardio and strength combined",
                "Develops grip strength",
                "Takes up less space than dumbbells",
            ]),
            best_exercises: strings(&[
                "Kettlebell swings",
                "Turkish get-ups",
                "Clean and press",
                "Goblet squats",
                "Snatches",
            ]),
            target_muscles: strings(&["Full body", "Core", "Posterior chain", "Shoulders", "Grip"]),
            skill_level: SkillLevel::Intermediate,
            best_for: strings(&[
                "Functional fitness",
                "HIIT workouts",
                "Metabolic conditioning",
                "Small spaces",
            ]),
        },
        EquipmentComparison {
            id: "dumbbell-1".to_string(),
            equipment_type: EquipmentType::Dumbbell,
            advantages: strings(&[
                "More beginner-friendly",
                "Better for isolated muscle targeting",
                "Wide variety of exercise options",
                "More comfortable for certain exercises",
                "Easier to progressively overload",
                "Familiar to most gym-goers",
            ]),
            best_exercises: strings(&[
                "Bicep curls",
                "Shoulder press",
                "Bench press",
                "Lateral raises",
                "Lunges",
            ]),
            target_muscles: strings(&["Biceps", "Triceps", "Chest", "Shoulders", "Quadriceps"]),
            skill_level: SkillLevel::Beginner,
            best_for: strings(&[
                "Muscle building",
                "Bodybuilding",
                "Beginners",
                "Targeted strength development",
            ]),
        },
    ]
}
