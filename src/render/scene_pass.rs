use super::{helpers, DrawUniforms, Globals, Vertex};
use crate::constants::{DRAW_UNIFORM_STRIDE, MAX_ACTIVE_STARS};
use crate::core::color::{hex_rgb, linear_rgb};
use crate::core::constants::{
    PARTICLE_COLOR, PARTICLE_OPACITY, SOLID_COLOR, STAR_COLOR, STAR_TRAIL_LENGTH, TESSERACT_COLOR,
    TORUS_COLOR,
};
use crate::core::geometry::trail_segment;
use crate::core::tesseract::SEGMENT_POINT_COUNT;
use crate::core::SceneState;
use glam::{Mat4, Vec3, Vec4};
use std::num::NonZeroU64;
use wgpu::util::DeviceExt;

// Draw slots in the per-draw uniform buffer. Galaxies follow the fixed
// objects and the star batch takes the last slot.
const SLOT_SOLID: usize = 0;
const SLOT_TESSERACT: usize = 1;
const SLOT_TORUS: usize = 2;
const SLOT_PARTICLES: usize = 3;
const SLOT_FIRST_GALAXY: usize = 4;

struct StaticMesh {
    buffer: wgpu::Buffer,
    count: u32,
}

fn tinted(color: u32, alpha: f32) -> Vec4 {
    linear_rgb(hex_rgb(color)).extend(alpha)
}

fn white_vertices(points: &[Vec3]) -> Vec<Vertex> {
    points.iter().map(|&p| Vertex::new(p, Vec4::ONE)).collect()
}

fn static_mesh(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> StaticMesh {
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    StaticMesh {
        buffer,
        count: vertices.len() as u32,
    }
}

fn dynamic_vertex_buffer(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Pipelines, geometry and uniforms for the HDR scene pass.
pub(crate) struct SceneResources {
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    draw_buffer: wgpu::Buffer,
    draw_bg: wgpu::BindGroup,
    draw_staging: Vec<u8>,

    line_pipeline: wgpu::RenderPipeline,
    points_alpha_pipeline: wgpu::RenderPipeline,
    points_additive_pipeline: wgpu::RenderPipeline,

    solid: StaticMesh,
    torus: StaticMesh,
    particles: StaticMesh,
    galaxies: Vec<StaticMesh>,
    tesseract: wgpu::Buffer,
    stars: wgpu::Buffer,
    star_vertex_count: u32,
}

impl SceneResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        scene: &SceneState,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let draw_size = NonZeroU64::new(std::mem::size_of::<DrawUniforms>() as u64);
        let draw_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_draw_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: draw_size,
                },
                count: None,
            }],
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let slot_count = SLOT_FIRST_GALAXY + scene.galaxies.len() + 1;
        let draw_bytes = slot_count as u64 * DRAW_UNIFORM_STRIDE;
        let draw_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_draws"),
            size: draw_bytes,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let draw_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_draw_bg"),
            layout: &draw_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &draw_buffer,
                    offset: 0,
                    size: draw_size,
                }),
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &draw_bgl],
            push_constant_ranges: &[],
        });
        let line_pipeline = helpers::make_scene_pipeline(
            device,
            "scene_lines",
            &layout,
            &shader,
            wgpu::PrimitiveTopology::LineList,
            color_format,
            wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        );
        let points_alpha_pipeline = helpers::make_scene_pipeline(
            device,
            "scene_points_alpha",
            &layout,
            &shader,
            wgpu::PrimitiveTopology::PointList,
            color_format,
            wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        );
        let points_additive_pipeline = helpers::make_scene_pipeline(
            device,
            "scene_points_additive",
            &layout,
            &shader,
            wgpu::PrimitiveTopology::PointList,
            color_format,
            helpers::ADDITIVE_BLENDING,
        );

        let solid = static_mesh(device, "solid_vb", &white_vertices(&scene.solid_mesh.segments()));
        let torus = static_mesh(device, "torus_vb", &white_vertices(&scene.torus_mesh.segments()));
        let particles = static_mesh(device, "particles_vb", &white_vertices(&scene.particle_positions));
        let galaxies = scene
            .galaxies
            .iter()
            .map(|g| {
                let vertices: Vec<Vertex> = g
                    .positions
                    .iter()
                    .zip(&g.colors)
                    .map(|(&p, &c)| Vertex::new(p, linear_rgb(c).extend(1.0)))
                    .collect();
                static_mesh(device, "galaxy_vb", &vertices)
            })
            .collect();
        let tesseract = dynamic_vertex_buffer(device, "tesseract_vb", SEGMENT_POINT_COUNT);
        let stars = dynamic_vertex_buffer(device, "stars_vb", MAX_ACTIVE_STARS * 2);

        log::info!(
            "[gpu] scene resources: {} draw slots, {} particles, {} galaxies",
            slot_count,
            particles.count,
            scene.galaxies.len()
        );

        Self {
            globals_buffer,
            globals_bg,
            draw_buffer,
            draw_bg,
            draw_staging: vec![0; draw_bytes as usize],
            line_pipeline,
            points_alpha_pipeline,
            points_additive_pipeline,
            solid,
            torus,
            particles,
            galaxies,
            tesseract,
            stars,
            star_vertex_count: 0,
        }
    }

    fn star_slot(&self) -> usize {
        SLOT_FIRST_GALAXY + self.galaxies.len()
    }

    fn put_draw(&mut self, slot: usize, model: Mat4, tint: Vec4) {
        let u = DrawUniforms {
            model: model.to_cols_array_2d(),
            tint: tint.to_array(),
        };
        let start = slot * DRAW_UNIFORM_STRIDE as usize;
        let bytes = bytemuck::bytes_of(&u);
        self.draw_staging[start..start + bytes.len()].copy_from_slice(bytes);
    }

    /// Upload this frame's camera, transforms and dynamic geometry.
    pub(crate) fn prepare(&mut self, queue: &wgpu::Queue, scene: &SceneState) {
        let globals = Globals {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
        };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        self.put_draw(SLOT_SOLID, scene.solid.matrix(), tinted(SOLID_COLOR, 1.0));
        self.put_draw(SLOT_TESSERACT, scene.tesseract.matrix(), tinted(TESSERACT_COLOR, 1.0));
        self.put_draw(SLOT_TORUS, scene.torus.matrix(), tinted(TORUS_COLOR, 1.0));
        self.put_draw(
            SLOT_PARTICLES,
            scene.particles.matrix(),
            tinted(PARTICLE_COLOR, PARTICLE_OPACITY),
        );
        for i in 0..self.galaxies.len() {
            let model = scene.galaxy_matrix(i).unwrap_or(Mat4::IDENTITY);
            self.put_draw(SLOT_FIRST_GALAXY + i, model, Vec4::ONE);
        }
        self.put_draw(self.star_slot(), Mat4::IDENTITY, tinted(STAR_COLOR, 1.0));
        queue.write_buffer(&self.draw_buffer, 0, &self.draw_staging);

        let edges = white_vertices(&scene.tesseract_points);
        queue.write_buffer(&self.tesseract, 0, bytemuck::cast_slice(&edges));

        let mut streaks = Vec::with_capacity(MAX_ACTIVE_STARS * 2);
        for (_, star) in scene.stars.iter().take(MAX_ACTIVE_STARS) {
            let [head, tail] = trail_segment(star.position, star.velocity, STAR_TRAIL_LENGTH);
            streaks.push(Vertex::new(head, Vec4::ONE));
            streaks.push(Vertex::new(tail, Vec4::new(1.0, 1.0, 1.0, 0.0)));
        }
        self.star_vertex_count = streaks.len() as u32;
        if !streaks.is_empty() {
            queue.write_buffer(&self.stars, 0, bytemuck::cast_slice(&streaks));
        }
    }

    fn draw_mesh(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        slot: usize,
        buffer: &wgpu::Buffer,
        count: u32,
    ) {
        if count == 0 {
            return;
        }
        let offset = (slot as u64 * DRAW_UNIFORM_STRIDE) as u32;
        rpass.set_bind_group(1, &self.draw_bg, &[offset]);
        rpass.set_vertex_buffer(0, buffer.slice(..));
        rpass.draw(0..count, 0..1);
    }

    /// Record every draw into an already-begun pass over the HDR target.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.globals_bg, &[]);

        rpass.set_pipeline(&self.points_additive_pipeline);
        for (i, g) in self.galaxies.iter().enumerate() {
            self.draw_mesh(rpass, SLOT_FIRST_GALAXY + i, &g.buffer, g.count);
        }

        rpass.set_pipeline(&self.points_alpha_pipeline);
        self.draw_mesh(rpass, SLOT_PARTICLES, &self.particles.buffer, self.particles.count);

        rpass.set_pipeline(&self.line_pipeline);
        self.draw_mesh(rpass, SLOT_SOLID, &self.solid.buffer, self.solid.count);
        self.draw_mesh(rpass, SLOT_TESSERACT, &self.tesseract, SEGMENT_POINT_COUNT as u32);
        self.draw_mesh(rpass, SLOT_TORUS, &self.torus.buffer, self.torus.count);
        self.draw_mesh(rpass, self.star_slot(), &self.stars, self.star_vertex_count);
    }
}
