use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalogue::{
    self, era, Genre, OutfitCategory, AGES, ATMOSPHERES, BODY_TYPES, CAMERA_ANGLES, EXPRESSIONS,
    FRAMINGS, GAZES, GENDERS, HAIR_COLORS, HAIR_LENGTHS, HAIR_STYLES, HAND_POSITIONS, LIGHTINGS,
    POSES, SKIN_DETAILS, SKIN_TEXTURES, TIMES, WEATHERS,
};
use crate::subject::{Scene, Subject};

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

fn pick_dropdown<R: Rng + ?Sized>(rng: &mut R, options: &'static [&'static str]) -> String {
    pick(rng, &catalogue::sampling_pool(options)).to_string()
}

pub fn random_hair<R: Rng + ?Sized>(rng: &mut R) -> String {
    let color = pick(rng, HAIR_COLORS);
    let length = pick(rng, HAIR_LENGTHS);
    let style = pick(rng, HAIR_STYLES);
    format!("{length} {color} hair, {style}")
}

pub fn random_outfit_category<R: Rng + ?Sized>(genre: Genre, rng: &mut R) -> OutfitCategory {
    let population = OutfitCategory::population(genre);
    population
        .choose(rng)
        .copied()
        .unwrap_or(population[0])
}

pub fn random_outfit<R: Rng + ?Sized>(genre: Genre, rng: &mut R) -> String {
    let category = random_outfit_category(genre, rng);
    pick(rng, category.options()).to_string()
}

pub fn randomize_subject<R: Rng + ?Sized>(genre: Genre, rng: &mut R) -> Subject {
    Subject {
        age: pick(rng, AGES).to_string(),
        gender: pick_dropdown(rng, GENDERS),
        ethnicity: pick_dropdown(rng, catalogue::ethnicities(genre)),
        body_type: pick_dropdown(rng, BODY_TYPES),
        body_type_custom: String::new(),
        hair: random_hair(rng),
        face: String::new(),
        expression: pick(rng, EXPRESSIONS).to_string(),
        gaze: pick(rng, GAZES).to_string(),
        hands: pick(rng, HAND_POSITIONS).to_string(),
        skin_texture: pick(rng, SKIN_TEXTURES).to_string(),
        skin_details: pick(rng, SKIN_DETAILS).to_string(),
        extras: String::new(),
        outfit: random_outfit(genre, rng),
        accessories: pick(rng, catalogue::accessories(genre)).to_string(),
        footwear: pick(rng, catalogue::footwear(genre)).to_string(),
        pose: pick(rng, POSES).to_string(),
    }
}

pub fn randomize_scene<R: Rng + ?Sized>(genre: Genre, rng: &mut R) -> Scene {
    Scene {
        location: pick(rng, catalogue::locations(genre)).to_string(),
        time: pick_dropdown(rng, TIMES),
        weather: pick_dropdown(rng, WEATHERS),
        atmosphere: pick(rng, ATMOSPHERES).to_string(),
        props: String::new(),
        background: String::new(),
        era: era(genre).to_string(),
        action: String::new(),
        story: String::new(),
        lighting: pick(rng, LIGHTINGS).to_string(),
        framing: pick_dropdown(rng, FRAMINGS),
        camera_angle: pick_dropdown(rng, CAMERA_ANGLES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{
        is_sentinel, ACCESSORIES_FANTASY, ACCESSORIES_REALISTIC, FOOTWEAR_FANTASY,
        FOOTWEAR_REALISTIC,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fantasy_outfits_come_only_from_fantasy_categories() {
        let mut rng = StdRng::seed_from_u64(7);
        let fantasy = catalogue::outfits(Genre::Fantasy);
        let realistic = catalogue::outfits(Genre::Realistic);
        for _ in 0..1000 {
            let subject = randomize_subject(Genre::Fantasy, &mut rng);
            assert!(fantasy.contains(&subject.outfit.as_str()), "{}", subject.outfit);
            assert!(!realistic.contains(&subject.outfit.as_str()));
        }
    }

    #[test]
    fn genre_partitioned_draws_never_cross_over() {
        let mut rng = StdRng::seed_from_u64(11);
        for genre in Genre::ALL {
            let other = genre.other();
            let other_ethnicities: Vec<&str> = catalogue::ethnicities(other)
                .iter()
                .copied()
                .filter(|value| !catalogue::ethnicities(genre).contains(value))
                .collect();
            let other_accessories: Vec<&str> = catalogue::accessories(other)
                .iter()
                .copied()
                .filter(|value| !catalogue::accessories(genre).contains(value))
                .collect();
            let other_footwear: Vec<&str> = catalogue::footwear(other)
                .iter()
                .copied()
                .filter(|value| !catalogue::footwear(genre).contains(value))
                .collect();

            for _ in 0..500 {
                let subject = randomize_subject(genre, &mut rng);
                assert!(!other_ethnicities.contains(&subject.ethnicity.as_str()));
                assert!(!other_accessories.contains(&subject.accessories.as_str()));
                assert!(!other_footwear.contains(&subject.footwear.as_str()));
                assert!(catalogue::ethnicities(genre).contains(&subject.ethnicity.as_str()));

                let scene = randomize_scene(genre, &mut rng);
                assert!(catalogue::locations(genre).contains(&scene.location.as_str()));
                assert!(!catalogue::locations(other).contains(&scene.location.as_str()));
            }
        }
    }

    #[test]
    fn sentinels_are_never_drawn() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let subject = randomize_subject(Genre::Realistic, &mut rng);
            for value in [&subject.gender, &subject.ethnicity, &subject.body_type] {
                assert!(!is_sentinel(value), "drew sentinel {value}");
            }
            let scene = randomize_scene(Genre::Fantasy, &mut rng);
            for value in [&scene.time, &scene.weather, &scene.framing, &scene.camera_angle] {
                assert!(!is_sentinel(value), "drew sentinel {value}");
            }
        }
    }

    #[test]
    fn open_ended_fields_stay_blank() {
        let mut rng = StdRng::seed_from_u64(5);
        let subject = randomize_subject(Genre::Fantasy, &mut rng);
        assert!(subject.face.is_empty());
        assert!(subject.extras.is_empty());
        assert!(subject.body_type_custom.is_empty());
        assert!(!subject.age.is_empty());
        assert!(!subject.pose.is_empty());

        let scene = randomize_scene(Genre::Realistic, &mut rng);
        assert!(scene.props.is_empty());
        assert!(scene.background.is_empty());
        assert!(scene.action.is_empty());
        assert!(scene.story.is_empty());
        assert_eq!(scene.era, "modern");
        assert_eq!(randomize_scene(Genre::Fantasy, &mut rng).era, "fantasy");
    }

    #[test]
    fn hair_composes_length_color_and_style() {
        let mut rng = StdRng::seed_from_u64(19);
        let hair = random_hair(&mut rng);
        let (head, style) = hair.split_once(" hair, ").expect("hair format");
        assert!(HAIR_STYLES.contains(&style));
        assert!(HAIR_LENGTHS.iter().any(|length| head.starts_with(length)));
        assert!(HAIR_COLORS.iter().any(|color| head.ends_with(color)));
    }

    #[test]
    fn everyday_category_is_drawn_about_twice_as_often() {
        let mut rng = StdRng::seed_from_u64(23);
        let draws = 8000;
        let casual = (0..draws)
            .filter(|_| random_outfit_category(Genre::Realistic, &mut rng) == OutfitCategory::Casual)
            .count();
        let share = casual as f64 / draws as f64;
        assert!((0.46..0.54).contains(&share), "casual share {share}");
    }

    #[test]
    fn empty_detail_members_are_reachable() {
        assert!(SKIN_DETAILS.contains(&""));
        assert!(ACCESSORIES_REALISTIC.contains(&""));
        assert!(ACCESSORIES_FANTASY.contains(&""));
        assert!(FOOTWEAR_REALISTIC.contains(&""));
        assert!(FOOTWEAR_FANTASY.contains(&""));

        let mut rng = StdRng::seed_from_u64(29);
        let blank = (0..2000)
            .filter(|_| randomize_subject(Genre::Realistic, &mut rng).skin_details.is_empty())
            .count();
        assert!(blank > 0);
    }

    #[test]
    fn same_seed_same_subject() {
        let first = randomize_subject(Genre::Fantasy, &mut StdRng::seed_from_u64(42));
        let second = randomize_subject(Genre::Fantasy, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
