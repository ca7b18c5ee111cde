use serde::Serialize;

use crate::domain::models::Difficulty;

/// Read-only workout template from the public catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryWorkout {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub duration: u32,
    pub exercises_count: u32,
    pub author: &'static str,
    pub is_public: bool,
}

pub const CATALOG: [LibraryWorkout; 4] = [
    LibraryWorkout {
        id: 1,
        name: "Treino de Peito Iniciante",
        description: "Treino focado no desenvolvimento do peitoral para iniciantes, com exercícios básicos e eficazes.",
        difficulty: Difficulty::Beginner,
        duration: 45,
        exercises_count: 5,
        author: "João Silva",
        is_public: true,
    },
    LibraryWorkout {
        id: 2,
        name: "Treino de Pernas Avançado",
        description: "Um treino intenso para membros inferiores, focado em força e hipertrofia.",
        difficulty: Difficulty::Advanced,
        duration: 75,
        exercises_count: 8,
        author: "Maria Fitness",
        is_public: true,
    },
    LibraryWorkout {
        id: 3,
        name: "Treino Full Body Intermediário",
        description: "Treino completo para o corpo todo, ideal para quem busca otimizar o tempo.",
        difficulty: Difficulty::Intermediate,
        duration: 60,
        exercises_count: 7,
        author: "Pedro Força",
        is_public: true,
    },
    LibraryWorkout {
        id: 4,
        name: "Cardio HIIT para Queima de Gordura",
        description: "Sessões curtas e intensas para acelerar o metabolismo e queimar gordura.",
        difficulty: Difficulty::Beginner,
        duration: 30,
        exercises_count: 6,
        author: "Ana Corrida",
        is_public: true,
    },
];
