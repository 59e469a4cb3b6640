//! Default records written the first time a collection is read.

use crate::models::{Event, TeamMember};

pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "e1".to_string(),
            title: "Community Pancake Breakfast".to_string(),
            date: "2025-09-20".to_string(),
            time: "8:00 AM – 11:30 AM".to_string(),
            location: "Brownsburg High School Cafeteria".to_string(),
            desc: "All-you-can-eat pancakes with student servers. Family friendly!".to_string(),
            cta: "RSVP".to_string(),
            url: "#".to_string(),
        },
        Event {
            id: "e2".to_string(),
            title: "5K Fun Run & Walk".to_string(),
            date: "2025-10-05".to_string(),
            time: "9:00 AM".to_string(),
            location: "Arbuckle Acres Park".to_string(),
            desc: "Walk, jog, or run — all paces welcome. Strollers encouraged!".to_string(),
            cta: "Register".to_string(),
            url: "#".to_string(),
        },
        Event {
            id: "e3".to_string(),
            title: "DECA Market Night".to_string(),
            date: "2025-10-22".to_string(),
            time: "6:00 PM – 8:30 PM".to_string(),
            location: "BHS Main Commons".to_string(),
            desc: "Student-run pop-up market featuring local vendors and crafts.".to_string(),
            cta: "Details".to_string(),
            url: "#".to_string(),
        },
    ]
}

pub fn seed_team() -> Vec<TeamMember> {
    let member = |id: &str, name: &str, role: &str, photo: &str| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        img: format!(
            "https://images.unsplash.com/photo-{}?q=80&w=800&auto=format&fit=crop",
            photo
        ),
    };

    vec![
        member(
            "t1",
            "Jordan Patel",
            "BHS DECA Chapter President",
            "1544005313-94ddf0286df2",
        ),
        member(
            "t2",
            "Avery Wallace",
            "Family Promise – Community Engagement",
            "1547425260-76bcadfb4f2c",
        ),
        member(
            "t3",
            "Casey Nguyen",
            "Fundraising & Sponsorships Lead",
            "1541534401786-2077eed87a6f",
        ),
        member(
            "t4",
            "Luis Hernandez",
            "Events Coordinator",
            "1527980965255-d3b416303d12",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_event_ids_and_fields() {
        let events = seed_events();
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e1", "e2", "e3"]);

        let value = serde_json::to_value(&events[0]).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["cta", "date", "desc", "id", "location", "time", "title", "url"]
        );
    }

    #[test]
    fn test_seed_team() {
        let team = seed_team();
        assert_eq!(team.len(), 4);
        assert_eq!(team[0].name, "Jordan Patel");
        assert!(team[3]
            .img
            .starts_with("https://images.unsplash.com/photo-1527980965255"));
    }
}
