use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{CatalogError, Exercise, Name, Routine};

struct BaseRoutine {
    name: &'static str,
    exercises: &'static [BaseExercise],
}

struct BaseExercise {
    name: &'static str,
    description: &'static str,
}

const ROUTINES: [BaseRoutine; 4] = [
    BaseRoutine {
        name: "Full Body Workout",
        exercises: &[
            BaseExercise {
                name: "Squats",
                description: "Works legs and glutes",
            },
            BaseExercise {
                name: "Push-ups",
                description: "Targets chest and triceps",
            },
            BaseExercise {
                name: "Rows",
                description: "Strengthens upper back",
            },
        ],
    },
    BaseRoutine {
        name: "Cardio",
        exercises: &[
            BaseExercise {
                name: "Running",
                description: "Improves cardiovascular health",
            },
            BaseExercise {
                name: "Jump Rope",
                description: "Burns calories and improves agility",
            },
            BaseExercise {
                name: "Cycling",
                description: "Cardiovascular exercise for legs",
            },
        ],
    },
    BaseRoutine {
        name: "Upper Body",
        exercises: &[
            BaseExercise {
                name: "Bench Press",
                description: "Builds chest and triceps",
            },
            BaseExercise {
                name: "Pull-ups",
                description: "Strengthens upper back and arms",
            },
            BaseExercise {
                name: "Shoulder Press",
                description: "Targets shoulders and triceps",
            },
        ],
    },
    BaseRoutine {
        name: "Lower Body",
        exercises: &[
            BaseExercise {
                name: "Deadlifts",
                description: "Works lower back and hamstrings",
            },
            BaseExercise {
                name: "Lunges",
                description: "Targets quads and glutes",
            },
            BaseExercise {
                name: "Calf Raises",
                description: "Strengthens calves",
            },
        ],
    },
];

/// Fixed mapping from routine name to its ordered exercises.
///
/// The routine names keep their declared order. A listed routine without an entry in the
/// mapping is valid and resolves to no exercises.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    routines: Vec<Name>,
    exercises: BTreeMap<Name, Vec<Exercise>>,
}

impl Catalog {
    pub fn new(
        routines: Vec<Name>,
        exercises: BTreeMap<Name, Vec<Exercise>>,
    ) -> Result<Self, CatalogError> {
        let mut seen_routines = BTreeSet::new();
        for name in &routines {
            if !seen_routines.insert(name) {
                return Err(CatalogError::DuplicateRoutine(name.clone()));
            }
        }

        for (routine, list) in &exercises {
            let mut seen_exercises = BTreeSet::new();
            for exercise in list {
                if !seen_exercises.insert(&exercise.name) {
                    return Err(CatalogError::DuplicateExercise {
                        routine: routine.clone(),
                        exercise: exercise.name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            routines,
            exercises,
        })
    }

    pub fn from_routines(routines: Vec<Routine>) -> Result<Self, CatalogError> {
        let names = routines.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
        let mut exercises = BTreeMap::new();
        for routine in routines {
            if exercises.contains_key(&routine.name) {
                return Err(CatalogError::DuplicateRoutine(routine.name));
            }
            exercises.insert(routine.name, routine.exercises);
        }
        Self::new(names, exercises)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        let routines = ROUTINES
            .iter()
            .map(|r| -> Result<Routine, CatalogError> {
                Ok(Routine::new(
                    Name::new(r.name)?,
                    r.exercises
                        .iter()
                        .map(|e| Exercise::new(e.name, e.description))
                        .collect::<Result<Vec<_>, _>>()?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::from_routines(routines)?;
        debug!("built-in catalog with {} routines", catalog.len());
        Ok(catalog)
    }

    #[must_use]
    pub fn routines(&self) -> &[Name] {
        &self.routines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    #[must_use]
    pub fn routine_name(&self, index: usize) -> Option<&Name> {
        self.routines.get(index)
    }

    #[must_use]
    pub fn exercises(&self, routine: &Name) -> &[Exercise] {
        self.exercises
            .get(routine)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn exercises_at(&self, index: usize) -> &[Exercise] {
        self.routine_name(index)
            .map(|name| self.exercises(name))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn name(name: &str) -> Name {
        Name::new(name).unwrap()
    }

    fn exercise(name: &str, description: &str) -> Exercise {
        Exercise::new(name, description).unwrap()
    }

    static CATALOG: std::sync::LazyLock<Catalog> =
        std::sync::LazyLock::new(|| Catalog::builtin().unwrap());

    #[test]
    fn test_catalog_builtin_routines() {
        assert_eq!(
            CATALOG.routines(),
            &[
                name("Full Body Workout"),
                name("Cardio"),
                name("Upper Body"),
                name("Lower Body"),
            ]
        );
    }

    #[test]
    fn test_catalog_builtin_entries_not_empty() {
        for routine in CATALOG.routines() {
            assert!(!CATALOG.exercises(routine).is_empty(), "{routine}");
        }
    }

    #[rstest]
    #[case(0, &["Squats", "Push-ups", "Rows"])]
    #[case(1, &["Running", "Jump Rope", "Cycling"])]
    #[case(2, &["Bench Press", "Pull-ups", "Shoulder Press"])]
    #[case(3, &["Deadlifts", "Lunges", "Calf Raises"])]
    fn test_catalog_builtin_exercises_at(#[case] index: usize, #[case] expected: &[&str]) {
        assert_eq!(
            CATALOG
                .exercises_at(index)
                .iter()
                .map(|e| e.name.to_string())
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_catalog_exercises_at_matches_name_lookup() {
        for (index, routine) in CATALOG.routines().iter().enumerate() {
            assert_eq!(CATALOG.exercises_at(index), CATALOG.exercises(routine));
        }
    }

    #[test]
    fn test_catalog_builtin_description() {
        assert_eq!(
            CATALOG.exercises(&name("Cardio"))[1],
            exercise("Jump Rope", "Burns calories and improves agility")
        );
    }

    #[test]
    fn test_catalog_scenario() {
        let catalog = Catalog::new(
            vec![name("A"), name("B")],
            BTreeMap::from([
                (name("A"), vec![exercise("Squats", "legs")]),
                (name("B"), vec![]),
            ]),
        )
        .unwrap();

        assert_eq!(catalog.exercises_at(0), &[exercise("Squats", "legs")]);
        assert!(catalog.exercises_at(1).is_empty());
    }

    #[test]
    fn test_catalog_missing_entry() {
        let catalog = Catalog::new(vec![name("A"), name("B")], BTreeMap::new()).unwrap();

        assert!(catalog.exercises(&name("A")).is_empty());
        assert!(catalog.exercises_at(1).is_empty());
        assert!(catalog.exercises(&name("C")).is_empty());
    }

    #[rstest]
    #[case(4)]
    #[case(usize::MAX)]
    fn test_catalog_out_of_range(#[case] index: usize) {
        assert_eq!(CATALOG.routine_name(index), None);
        assert!(CATALOG.exercises_at(index).is_empty());
    }

    #[test]
    fn test_catalog_default() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.exercises_at(0).is_empty());
    }

    #[test]
    fn test_catalog_duplicate_routine() {
        assert_eq!(
            Catalog::new(vec![name("A"), name("A")], BTreeMap::new()),
            Err(CatalogError::DuplicateRoutine(name("A")))
        );
        assert_eq!(
            Catalog::from_routines(vec![
                Routine::new(name("A"), vec![]),
                Routine::new(name("A"), vec![exercise("Squats", "legs")]),
            ]),
            Err(CatalogError::DuplicateRoutine(name("A")))
        );
    }

    #[test]
    fn test_catalog_duplicate_exercise() {
        assert_eq!(
            Catalog::new(
                vec![name("A")],
                BTreeMap::from([(
                    name("A"),
                    vec![exercise("Squats", "legs"), exercise("Squats", "glutes")]
                )]),
            ),
            Err(CatalogError::DuplicateExercise {
                routine: name("A"),
                exercise: name("Squats"),
            })
        );
    }

    #[test]
    fn test_catalog_same_exercise_in_different_routines() {
        let catalog = Catalog::from_routines(vec![
            Routine::new(name("A"), vec![exercise("Squats", "legs")]),
            Routine::new(name("B"), vec![exercise("Squats", "glutes")]),
        ])
        .unwrap();

        assert_eq!(catalog.exercises_at(1), &[exercise("Squats", "glutes")]);
    }
}
